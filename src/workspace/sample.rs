//! Built-in demo workspace
//!
//! Stands in for a real knowledge source so ambient suggestions have
//! something to pull context from out of the box.

use super::page::Page;

pub fn sample_workspace() -> Vec<Page> {
    vec![
        Page::note(
            "note-brainstorm",
            "Brainstorm: New Product Ideas",
            &[
                "Ideas for new products in 2024:",
                "- Eco-friendly packaging solutions",
                "- AI-powered design assistant",
                "- Subscription model for design services",
                "Next steps: Evaluate feasibility and market demand.",
            ],
        ),
        Page::table(
            "financials-2024",
            "2024 Financial Overview",
            &["Month", "Revenue", "Expenses", "Profit"],
            &[
                &["January", "$12,000", "$8,000", "$4,000"],
                &["February", "$15,000", "$9,500", "$5,500"],
                &["March", "$13,500", "$8,800", "$4,700"],
                &["April", "$16,200", "$10,100", "$6,100"],
                &["May", "$14,800", "$9,200", "$5,600"],
            ],
        ),
        Page::table(
            "tasks-db",
            "Task Database",
            &["Task", "Owner", "Status", "Due Date", "Priority"],
            &[
                &["Design homepage banner", "Alice Smith", "In Progress", "2024-06-14", "High"],
                &["Send invoice to client", "Henry Patel", "To Do", "2024-06-10", "High"],
                &["Update brand guidelines", "Frank Green", "To Do", "2024-06-21", "Medium"],
                &["Fix login bug", "Carol Jones", "In Progress", "2024-06-07", "High"],
                &["QA new feature", "Grace Liu", "Blocked", "2024-06-18", "Medium"],
                &["Draft marketing email", "Eva Brown", "To Do", "2024-06-25", "Low"],
                &["Organize team meeting", "David Kim", "Done", "2024-06-03", "Medium"],
                &["Research competitor pricing", "Ivy Chen", "In Progress", "2024-06-28", "Low"],
            ],
        ),
        Page::table(
            "team-directory",
            "Team Directory",
            &["Name", "Role", "Email"],
            &[
                &["Alice Smith", "Designer", "alice.smith@company.com"],
                &["Bob Lee", "Account Manager", "bob.lee@company.com"],
                &["Carol Jones", "Developer", "carol.jones@company.com"],
                &["David Kim", "Project Manager", "david.kim@company.com"],
                &["Eva Brown", "Marketing Lead", "eva.brown@company.com"],
                &["Henry Patel", "Finance", "henry.patel@company.com"],
            ],
        ),
        Page::note(
            "note-client-feedback",
            "Client Feedback: May 2024",
            &[
                "Feedback from Client X:",
                "- Loved the new homepage design",
                "- Suggested more color options for product Y",
                "- Noted slow response time on mobile app",
                "Action: Address mobile performance in next sprint.",
            ],
        ),
        Page::note(
            "note-meeting-2024-06-01",
            "Meeting Notes: 2024-06-01",
            &[
                "Attendees: Alice, Bob, Carol, Eva",
                "Agenda:",
                "- Q3 project kickoff",
                "- Budget review",
                "- Marketing plan discussion",
                "Decisions:",
                "- Move forward with new ad campaign",
                "- Assign Carol to lead mobile app improvements",
            ],
        ),
        Page::note(
            "note-marketing-plan",
            "Marketing Plan: Summer 2024",
            &[
                "Objectives:",
                "- Increase brand awareness by 20%",
                "- Launch influencer campaign in July",
                "- Improve website conversion rate",
                "Channels: Social, Email, Paid Ads",
            ],
        ),
        Page::note(
            "note-research-competitors",
            "Research: Competitor Analysis",
            &[
                "Competitors analyzed: DesignCo, PixelWorks, Brandify",
                "Key findings:",
                "- DesignCo: Strong in B2B, high pricing",
                "- PixelWorks: Fast delivery, limited service range",
                "- Brandify: Best for startups, flexible packages",
            ],
        ),
    ]
}
