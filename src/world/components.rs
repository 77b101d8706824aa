use bevy::prelude::*;

/// Marker for everything spawned for a level session. Despawned on leaving the level.
#[derive(Component)]
pub struct LevelEntity;

/// Shows or hides an optional presentation entity. Unwired or despawned
/// targets are skipped.
pub fn set_visible(visibilities: &mut Query<&mut Visibility>, target: Option<Entity>, visible: bool) {
    let Some(entity) = target else {
        return;
    };
    let Ok(mut visibility) = visibilities.get_mut(entity) else {
        debug!("Presentation entity {:?} has no Visibility, skipping", entity);
        return;
    };
    *visibility = if visible {
        Visibility::Inherited
    } else {
        Visibility::Hidden
    };
}
