// SPDX-License-Identifier: MPL-2.0
//! Integration tests to validate style and design token coherence.

#[cfg(test)]
mod tests {
    use iced::Theme;
    use iced_folio::ui::design_tokens::{opacity, palette, sizing, spacing};
    use iced_folio::ui::notifications::Severity;
    use iced_folio::ui::styles::button;
    use iced_folio::ui::theming::{AppTheme, ThemeMode};

    #[test]
    fn all_button_styles_compile() {
        let theme = Theme::Dark;

        // Smoke-test all button styles compile and are callable
        let _ = button::primary(&theme, iced::widget::button::Status::Active);
        let _ = button::disabled()(&theme, iced::widget::button::Status::Disabled);
        let _ = button::nav_link(palette::WHITE)(&theme, iced::widget::button::Status::Hovered);
        let _ = button::dismiss(&theme, iced::widget::button::Status::Active);
    }

    #[test]
    fn design_tokens_are_accessible() {
        // Palette
        let _ = palette::PRIMARY_500;
        let _ = palette::WHITE;

        // Spacing
        let _ = spacing::MD;

        // Opacity
        let _ = opacity::OVERLAY_STRONG;

        // Sizing
        let _ = sizing::TOAST_WIDTH;
    }

    #[test]
    fn theming_switches_correctly() {
        let light = AppTheme::new(ThemeMode::Light);
        let dark = AppTheme::new(ThemeMode::Dark);

        // Surface colors should be visually opposite between light and dark
        assert!(light.colors.surface_primary.r > dark.colors.surface_primary.r);

        // Text colors should also be opposite between light and dark
        assert!(light.colors.text_primary.r < dark.colors.text_primary.r);
    }

    #[test]
    fn severity_styling_matches_the_semantic_palette() {
        assert_eq!(Severity::Success.color(), palette::SUCCESS_500);
        assert_eq!(Severity::Error.color(), palette::ERROR_500);
        assert_eq!(Severity::Warning.color(), palette::WARNING_500);
        assert_eq!(Severity::Info.color(), palette::INFO_500);
    }
}
