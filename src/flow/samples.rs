//! Demonstration flows shipped with the tool.

use super::builder::FlowBuilder;
use super::model::{Flow, FlowOption};
use crate::layout::LayoutEngine;

pub const SALMON_ACT_ID: &str = "salmon-act-1986";
pub const GIFT_REGISTER_ID: &str = "gift-register";

fn to(id: &str, label: &str, target: &str) -> FlowOption {
    FlowOption::internal(id, label, Some(target))
}

/// Section 32 handling guidance. Contains a cycle back to the start and an external link.
pub fn salmon_act() -> Flow {
    FlowBuilder::new(SALMON_ACT_ID, "Salmon Act 1986 Compliance")
        .description("Guide for handling salmon in suspicious circumstances.")
        .start("node-1")
        .decision("node-1", "Are you handling a salmon right now?", |n| {
            n.at(500.0, 50.0)
                .body(
                    "This short guide helps you understand whether your current interaction \
                     with a salmon could raise issues under Section 32 of the Salmon Act 1986.\n\n\
                     Section 32 applies only if you are handling or in possession of salmon.",
                )
                .with_option(to("opt-1-1", "Yes - I have or am handling a salmon", "node-2"))
                .with_option(to("opt-1-2", "No - I am just going about my day", "node-no-salmon"))
        })
        .information("node-no-salmon", "No issue identified", |n| {
            n.at(800.0, 250.0)
                .body(
                    "If you are not handling or possessing salmon, Section 32 does not apply. \
                     You are free to continue minding your own business.",
                )
                .with_option(to("opt-no-1", "Start Over", "node-1"))
        })
        .decision("node-2", "Where did the salmon come from?", |n| {
            n.at(200.0, 250.0)
                .body(
                    "The legality depends on how the salmon was obtained and whether its \
                     origin appears legitimate.",
                )
                .with_option(to(
                    "opt-2-1",
                    "Purchased from a licensed fishmonger or retailer",
                    "node-safe",
                ))
                .with_option(to("opt-2-2", "I caught it myself", "node-catch"))
                .with_option(to(
                    "opt-2-3",
                    "Obtained from an unclear or suspicious source",
                    "node-risk",
                ))
        })
        .information("node-safe", "Compliant - legitimate source", |n| {
            n.at(50.0, 500.0).body(
                "Salmon purchased from a licensed retailer or caught personally with a valid \
                 licence is generally not considered suspicious. Based on what you have said, \
                 no issue is apparent under Section 32.",
            )
        })
        .decision(
            "node-risk",
            "Do you believe the salmon may have been taken unlawfully?",
            |n| {
                n.at(350.0, 500.0)
                    .body(
                        "An offence can arise if you believe, or it would be reasonable to \
                         believe, that the salmon was illegally obtained.",
                    )
                    .with_option(to("opt-risk-1", "Yes - I suspect it may be illegal", "node-illegal"))
                    .with_option(to("opt-risk-2", "No - but I cannot be completely sure", "node-doubt"))
            },
        )
        .decision("node-catch", "Do you hold a valid rod licence?", |n| {
            n.at(650.0, 500.0)
                .body(
                    "Handling salmon you caught yourself is only lawful if it was taken in \
                     accordance with licensing and fishing regulations.",
                )
                .with_option(to("opt-catch-1", "Yes - I have a valid rod licence", "node-safe"))
                .with_option(to("opt-catch-2", "No - I do not have one", "node-help-links"))
                .with_option(to("opt-catch-3", "I am not sure", "node-help-links"))
        })
        .information("node-illegal", "High risk - suspicious circumstances", |n| {
            n.at(200.0, 750.0).body(
                "You may be in breach of Section 32 of the Salmon Act 1986. Handling salmon \
                 where you know or reasonably believe it was illegally taken is an offence and \
                 may carry criminal penalties.",
            )
        })
        .information("node-doubt", "At risk - further checks required", |n| {
            n.at(500.0, 750.0).body(
                "Even without actual knowledge, the law applies a reasonable belief standard. \
                 If the circumstances are suspicious, you should verify the salmon origin \
                 immediately.",
            )
        })
        .information("node-help-links", "At risk - licensing issue", |n| {
            n.at(800.0, 750.0)
                .body(
                    "Handling salmon without a valid licence may be unlawful. If you are unsure, \
                     you should verify your licensing status before proceeding.",
                )
                .with_option(FlowOption::external(
                    "opt-help-1",
                    "Go to GOV.UK Fishing Licenses",
                    "https://www.gov.uk/fishing-licences",
                ))
                .with_option(to("opt-help-2", "Back to Start", "node-1"))
        })
        .build()
}

/// Gift and hospitality registration policy.
pub fn gift_register() -> Flow {
    FlowBuilder::new(GIFT_REGISTER_ID, "Gift Register and Compliance")
        .description("Guidance on when to record gifts and hospitality.")
        .start("gift-node-1")
        .information("gift-node-1", "Gift Register Policy", |n| {
            n.body(
                "This tool helps you determine if a gift or hospitality you have received must \
                 be recorded on the internal Gift Register according to our corporate \
                 compliance policy.",
            )
            .with_option(to("gift-opt-1-1", "Start Assessment", "gift-node-2"))
        })
        .decision("gift-node-2", "Threshold Check", |n| {
            n.body("Is the estimated value of the gift or hospitality over 100 GBP?")
                .with_option(to("gift-opt-2-1", "Yes, it is over 100 GBP", "gift-node-3"))
                .with_option(to("gift-opt-2-2", "No, it is 100 GBP or under", "gift-node-4"))
        })
        .information("gift-node-3", "Registration Required", |n| {
            n.body(
                "Gifts over 100 GBP must be recorded on the Intranet Gift Register within 7 days \
                 of receipt to ensure transparency and avoid conflicts of interest.",
            )
            .with_option(FlowOption::external(
                "gift-opt-3-1",
                "Open Gift Register (Intranet)",
                "https://intranet.example/gift-register",
            ))
        })
        .information("gift-node-4", "No Registration Required", |n| {
            n.body(
                "Gifts under 100 GBP generally do not need to be registered. However, always \
                 ensure the gift is appropriate and does not create a conflict of interest. If \
                 offered by a vendor currently in a tender process, you must decline regardless \
                 of value.",
            )
        })
        .build()
}

/// Both demo flows, auto-laid-out with the default engine.
pub fn all() -> Vec<Flow> {
    let engine = LayoutEngine::default();
    [salmon_act(), gift_register()]
        .iter()
        .map(|flow| engine.layout(flow).apply(flow))
        .collect()
}
