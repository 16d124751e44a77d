//! Event display-color policies.
//!
//! Two deliberately distinct policies live here. The shared-color
//! convention is what event rendering uses: one participant keeps their own
//! color, two or more render in the family color so multi-person events
//! never look like any single member's. Channel-average blending is exposed
//! separately for callers that explicitly want a visual blend; it is never
//! substituted for the shared-color convention.

use crate::models::color::Color;
use crate::models::event::Event;
use crate::models::member::Member;
use crate::services::palette::FAMILY_COLOR;

use super::{normalize_color, DEFAULT_DARKEN_PERCENT};

/// Shared-color convention with the default family color.
pub fn resolve_event_color(participant_colors: &[Option<Color>], fallback: Color) -> Color {
    resolve_event_color_with(participant_colors, fallback, FAMILY_COLOR)
}

/// Shared-color convention with an explicit family color.
///
/// Missing entries are skipped: zero usable colors resolve to `fallback`,
/// exactly one keeps that color, two or more resolve to `family`. The
/// result is always display-normalized.
pub fn resolve_event_color_with(
    participant_colors: &[Option<Color>],
    fallback: Color,
    family: Color,
) -> Color {
    let mut usable = participant_colors.iter().flatten();
    let resolved = match (usable.next(), usable.next()) {
        (None, _) => fallback,
        (Some(only), None) => *only,
        (Some(_), Some(_)) => family,
    };
    normalize_color(resolved, DEFAULT_DARKEN_PERCENT)
}

/// Average each RGB channel independently across `colors`, rounding to the
/// nearest integer. An empty slice yields the family color.
///
/// This is the explicit-blend policy; event rendering does not use it.
pub fn blend_colors(colors: &[Color]) -> Color {
    if colors.is_empty() {
        return FAMILY_COLOR;
    }
    let count = colors.len() as f32;
    let (mut r, mut g, mut b) = (0u32, 0u32, 0u32);
    for color in colors {
        r += color.r as u32;
        g += color.g as u32;
        b += color.b as u32;
    }
    Color::new(
        (r as f32 / count).round() as u8,
        (g as f32 / count).round() as u8,
        (b as f32 / count).round() as u8,
    )
}

/// Display color for an event against the current member roster.
///
/// An explicit event color override wins; otherwise each participant's
/// assigned color feeds the shared-color convention, with the family color
/// covering participant-less events.
pub fn display_color_for(event: &Event, members: &[Member]) -> Color {
    if let Some(color) = event.color {
        return normalize_color(color, DEFAULT_DARKEN_PERCENT);
    }
    let participant_colors: Vec<Option<Color>> = event
        .participant_ids
        .iter()
        .map(|id| {
            members
                .iter()
                .find(|member| member.id == Some(*id))
                .and_then(|member| member.color)
        })
        .collect();
    resolve_event_color(&participant_colors, FAMILY_COLOR)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, Local};
    use pretty_assertions::assert_eq;

    const BLUE: Color = Color::new(0x3B, 0x82, 0xF6);
    const AMBER: Color = Color::new(0xF5, 0x9E, 0x0B);

    #[test]
    fn test_no_colors_resolves_to_fallback() {
        let fallback = Color::new(0x1E, 0x3A, 0x8A);
        assert_eq!(resolve_event_color(&[], fallback), fallback);
        assert_eq!(resolve_event_color(&[None, None], fallback), fallback);
    }

    #[test]
    fn test_single_color_passes_through_normalized() {
        assert_eq!(
            resolve_event_color(&[Some(AMBER)], FAMILY_COLOR),
            normalize_color(AMBER, DEFAULT_DARKEN_PERCENT)
        );
    }

    #[test]
    fn test_single_color_survives_missing_entries() {
        assert_eq!(
            resolve_event_color(&[None, Some(BLUE), None], FAMILY_COLOR),
            BLUE
        );
    }

    #[test]
    fn test_two_colors_resolve_to_family_not_a_blend() {
        // The shared-color convention is the default policy; a blend must
        // never silently replace it.
        let resolved = resolve_event_color(&[Some(BLUE), Some(AMBER)], BLUE);
        assert_eq!(resolved, FAMILY_COLOR);
        assert_ne!(resolved, blend_colors(&[BLUE, AMBER]));
    }

    #[test]
    fn test_explicit_family_color_is_honored() {
        let family = Color::new(0x11, 0x22, 0x33);
        assert_eq!(
            resolve_event_color_with(&[Some(BLUE), Some(AMBER)], BLUE, family),
            family
        );
    }

    #[test]
    fn test_blend_averages_channels() {
        assert_eq!(
            blend_colors(&[Color::new(255, 255, 255), Color::new(0, 0, 0)]),
            Color::new(0x80, 0x80, 0x80)
        );
    }

    #[test]
    fn test_blend_of_one_is_identity() {
        assert_eq!(blend_colors(&[BLUE]), BLUE);
    }

    #[test]
    fn test_blend_of_none_is_family_color() {
        assert_eq!(blend_colors(&[]), FAMILY_COLOR);
    }

    #[test]
    fn test_blend_rounds_each_channel() {
        let blended = blend_colors(&[Color::new(10, 0, 1), Color::new(11, 0, 2)]);
        // 10.5 rounds away from zero, 1.5 likewise
        assert_eq!(blended, Color::new(11, 0, 2));
    }

    fn roster() -> Vec<Member> {
        let mut alice = Member::with_color("Alice", BLUE);
        alice.id = Some(1);
        let mut ben = Member::with_color("Ben", AMBER);
        ben.id = Some(2);
        let mut colorless = Member::new("Chloe");
        colorless.id = Some(3);
        vec![alice, ben, colorless]
    }

    fn event_with(participants: Vec<i64>) -> Event {
        let start = Local::now();
        Event::new("Picnic", start, start + Duration::hours(2))
            .unwrap()
            .with_participants(participants)
    }

    #[test]
    fn test_display_color_solo_event_uses_member_color() {
        assert_eq!(display_color_for(&event_with(vec![1]), &roster()), BLUE);
    }

    #[test]
    fn test_display_color_shared_event_uses_family_color() {
        assert_eq!(
            display_color_for(&event_with(vec![1, 2]), &roster()),
            FAMILY_COLOR
        );
    }

    #[test]
    fn test_display_color_unknown_and_colorless_participants_fall_back() {
        // Chloe has no color yet and id 99 is not in the roster; the event
        // falls back to the family color rather than erroring.
        assert_eq!(
            display_color_for(&event_with(vec![3, 99]), &roster()),
            FAMILY_COLOR
        );
    }

    #[test]
    fn test_display_color_override_wins() {
        let event = event_with(vec![1, 2]).with_color(Color::new(0x11, 0x22, 0x33));
        assert_eq!(
            display_color_for(&event, &roster()),
            Color::new(0x11, 0x22, 0x33)
        );
    }
}
