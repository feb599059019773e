//! Theme module for deliverables-tui
//!
//! Centralized colour palette and the status badge table.

use ratatui::style::Color;

use crate::models::DeliverableStatus;

// ============================================================================
// Background Colors
// ============================================================================

/// Card background (#12161c)
pub const BG_SECONDARY: Color = Color::Rgb(18, 22, 28);

/// Selected card / modal background (#1a1f26)
pub const BG_TERTIARY: Color = Color::Rgb(26, 31, 38);

/// Subtle border color (#1e2530)
pub const BORDER_SUBTLE: Color = Color::Rgb(30, 37, 48);

// ============================================================================
// Accent Colors
// ============================================================================

/// Primary cyan accent color (#00d4aa)
pub const CYAN_PRIMARY: Color = Color::Rgb(0, 212, 170);

// ============================================================================
// Status Colors
// ============================================================================

/// Green success color (#4ade80)
pub const GREEN_SUCCESS: Color = Color::Rgb(74, 222, 128);

/// Blue in-progress color (#60a5fa)
pub const BLUE_INFO: Color = Color::Rgb(96, 165, 250);

/// Amber warning color (#fbbf24)
pub const AMBER_WARNING: Color = Color::Rgb(251, 191, 36);

// ============================================================================
// Text Colors
// ============================================================================

/// Primary text color - bright white (#e2e8f0)
pub const TEXT_PRIMARY: Color = Color::Rgb(226, 232, 240);

/// Secondary text color - muted gray (#94a3b8)
pub const TEXT_SECONDARY: Color = Color::Rgb(148, 163, 184);

/// Muted text color - for labels and hints (#64748b)
pub const TEXT_MUTED: Color = Color::Rgb(100, 116, 139);

// ============================================================================
// Status badges
// ============================================================================

/// Icon, label and colour of a status badge
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusBadge {
    pub icon: &'static str,
    pub label: &'static str,
    pub color: Color,
}

pub fn status_badge(status: DeliverableStatus) -> StatusBadge {
    let (icon, color) = match status {
        DeliverableStatus::Pending => ("○", AMBER_WARNING),
        DeliverableStatus::InProgress => ("◐", BLUE_INFO),
        DeliverableStatus::Completed => ("✓", GREEN_SUCCESS),
    };
    StatusBadge {
        icon,
        label: status.label(),
        color,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_badge_table() {
        let expected = [
            (DeliverableStatus::Pending, "Pending", AMBER_WARNING),
            (DeliverableStatus::InProgress, "In Progress", BLUE_INFO),
            (DeliverableStatus::Completed, "Completed", GREEN_SUCCESS),
        ];
        for (status, label, color) in expected {
            let badge = status_badge(status);
            assert_eq!(badge.label, label);
            assert_eq!(badge.color, color);
        }
    }

    #[test]
    fn test_status_badges_are_distinct() {
        let colors: Vec<Color> = DeliverableStatus::ALL
            .iter()
            .map(|s| status_badge(*s).color)
            .collect();
        assert_ne!(colors[0], colors[1]);
        assert_ne!(colors[1], colors[2]);
        assert_ne!(colors[0], colors[2]);
    }
}
