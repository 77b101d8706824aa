use bevy::prelude::*;

// Fluorescent supermarket palette
pub const MENU_BACKGROUND: Color = Color::srgb(0.06, 0.09, 0.08);
pub const OVERLAY_COLOR: Color = Color::srgba(0.02, 0.04, 0.03, 0.8);

pub const BUTTON_IDLE: Color = Color::srgb(0.12, 0.22, 0.18);
pub const BUTTON_HOVER: Color = Color::srgb(0.18, 0.34, 0.27);
pub const BUTTON_PRESSED: Color = Color::srgb(0.85, 0.65, 0.15);

pub const LABEL_COLOR: Color = Color::srgb(0.92, 0.95, 0.9);
pub const HEADING_COLOR: Color = Color::srgb(0.95, 0.85, 0.3);

pub const MENU_BUTTON_WIDTH: f32 = 280.0;
pub const MENU_BUTTON_HEIGHT: f32 = 56.0;

pub fn menu_button_node() -> Node {
    Node {
        width: Val::Px(MENU_BUTTON_WIDTH),
        height: Val::Px(MENU_BUTTON_HEIGHT),
        margin: UiRect::vertical(Val::Px(8.0)),
        justify_content: JustifyContent::Center,
        align_items: AlignItems::Center,
        ..default()
    }
}

pub fn label_font() -> TextFont {
    TextFont {
        font_size: 26.0,
        ..default()
    }
}

pub fn heading_font() -> TextFont {
    TextFont {
        font_size: 56.0,
        ..default()
    }
}

/// Full-screen centered column shared by the main menu, pause menu and outcome panels.
pub fn screen_root() -> Node {
    Node {
        width: Val::Percent(100.0),
        height: Val::Percent(100.0),
        flex_direction: FlexDirection::Column,
        justify_content: JustifyContent::Center,
        align_items: AlignItems::Center,
        position_type: PositionType::Absolute,
        ..default()
    }
}

/// Background color for a menu button in the given interaction state.
pub fn button_color(interaction: Interaction) -> Color {
    match interaction {
        Interaction::Pressed => BUTTON_PRESSED,
        Interaction::Hovered => BUTTON_HOVER,
        Interaction::None => BUTTON_IDLE,
    }
}
