//! Disclaimer texts shown before risky operations.
//!
//! The wording here is load-bearing: the removal flow greps terminal
//! output for the confirmation phrase, so these strings must not drift.

use owo_colors::Style;

use crate::theme::paint;

/// Which disclaimer to show.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisclaimerKind {
    /// Warranty and liability notice shown before installation.
    Legal,
    /// Prompt preceding the scripted full teardown.
    Removal,
    /// Inventory of everything the teardown deletes.
    SystemRemoval,
}

impl DisclaimerKind {
    /// Map a tag from the command line to a kind. Matching is exact.
    #[must_use]
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "legal" => Some(Self::Legal),
            "removal" => Some(Self::Removal),
            "system_removal" => Some(Self::SystemRemoval),
            _ => None,
        }
    }

    /// Panel title.
    #[must_use]
    pub fn title(self) -> &'static str {
        match self {
            Self::Legal => "LEGAL DISCLAIMER",
            Self::Removal => "COMPLETE REMOVAL CONFIRMATION",
            Self::SystemRemoval => "COMPLETE SYSTEM REMOVAL",
        }
    }

    /// Panel body with inline styling applied.
    #[must_use]
    pub fn body(self) -> String {
        let bold = Style::new().bold();
        let bold_red = Style::new().red().bold();
        let lines: Vec<String> = match self {
            Self::Legal => vec![
                paint("⚠️  LEGAL DISCLAIMER ⚠️", bold_red),
                String::new(),
                "This script is provided 'AS IS' without warranty of any kind.".into(),
                "The author(s) cannot be held responsible for any damage,".into(),
                "data loss, system instability, or other issues that may".into(),
                "result from running this script.".into(),
                String::new(),
                paint("YOU RUN THIS SCRIPT ENTIRELY AT YOUR OWN RISK.", bold),
                String::new(),
                "By proceeding, you acknowledge that you:".into(),
                "• Understand the risks involved".into(),
                "• Have backups of important data".into(),
                "• Accept full responsibility for any consequences".into(),
                "• Release the author(s) from any liability".into(),
            ],
            Self::Removal => vec![
                paint("🚨 COMPLETE REMOVAL CONFIRMATION 🚨", bold_red),
                String::new(),
                format!(
                    "This will {} all Death Star Pi components:",
                    paint("COMPLETELY REMOVE", bold)
                ),
                "• Docker and all containers".into(),
                "• Ansible (if installed by this script)".into(),
                "• All configuration files and data".into(),
                "• System modifications and optimizations".into(),
                String::new(),
                format!(
                    "Type '{}' to proceed with complete removal,",
                    paint("REMOVE DEATH STAR", Style::new().yellow().bold())
                ),
                "or anything else to use interactive mode.".into(),
            ],
            Self::SystemRemoval => vec![
                paint("⚠️  COMPLETE SYSTEM REMOVAL ⚠️", bold_red),
                String::new(),
                "This will completely remove all Death Star Pi components:".into(),
                "• Pi-hole (DNS filtering)".into(),
                "• Grafana & Prometheus (monitoring)".into(),
                "• All monitoring services".into(),
                "• Docker containers, images, and volumes".into(),
                "• internet-pi repository and configurations".into(),
                "• Ansible collections and configurations".into(),
                "• System hostname and /etc/hosts changes".into(),
                "• Pi 5 boot optimizations (if applicable)".into(),
                "• PADD alias and customizations (if applicable)".into(),
                String::new(),
                paint("⚠️  THIS ACTION CANNOT BE UNDONE! ⚠️", bold_red),
            ],
        };
        lines.join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use console::strip_ansi_codes;

    #[test]
    fn test_from_tag() {
        assert_eq!(DisclaimerKind::from_tag("legal"), Some(DisclaimerKind::Legal));
        assert_eq!(
            DisclaimerKind::from_tag("removal"),
            Some(DisclaimerKind::Removal)
        );
        assert_eq!(
            DisclaimerKind::from_tag("system_removal"),
            Some(DisclaimerKind::SystemRemoval)
        );
        assert_eq!(DisclaimerKind::from_tag("LEGAL"), None);
        assert_eq!(DisclaimerKind::from_tag("nuke"), None);
    }

    #[test]
    fn test_legal_body() {
        let body = DisclaimerKind::Legal.body();
        let body = strip_ansi_codes(&body);
        assert!(body.contains("provided 'AS IS' without warranty"));
        assert!(body.contains("YOU RUN THIS SCRIPT ENTIRELY AT YOUR OWN RISK."));
        assert!(body.contains("• Release the author(s) from any liability"));
    }

    #[test]
    fn test_removal_body_contains_confirmation_phrase() {
        let body = DisclaimerKind::Removal.body();
        let body = strip_ansi_codes(&body);
        assert!(body.contains("Type 'REMOVE DEATH STAR' to proceed"));
        assert!(body.contains("or anything else to use interactive mode."));
    }

    #[test]
    fn test_system_removal_body() {
        let body = DisclaimerKind::SystemRemoval.body();
        let body = strip_ansi_codes(&body);
        assert!(body.contains("• Pi-hole (DNS filtering)"));
        assert!(body.contains("⚠️  THIS ACTION CANNOT BE UNDONE! ⚠️"));
    }

    #[test]
    fn test_bodies_are_distinct() {
        let bodies = [
            DisclaimerKind::Legal.body(),
            DisclaimerKind::Removal.body(),
            DisclaimerKind::SystemRemoval.body(),
        ];
        assert_ne!(bodies[0], bodies[1]);
        assert_ne!(bodies[1], bodies[2]);
        assert_ne!(bodies[0], bodies[2]);
    }
}
