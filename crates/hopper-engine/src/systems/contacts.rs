use crate::core::world::World;

/// Report every overlap between an active entity and a surface to the
/// entity's collision callback. Returns the number of contacts found.
///
/// Run after [`World::tick`], so a landing snaps the body before it is
/// published and support is re-checked on the next tick.
pub fn resolve_contacts(world: &mut World) -> usize {
    let (entities, surfaces) = world.split_mut();
    let mut contacts = 0;
    for entity in entities.iter_mut().filter(|e| e.active) {
        for surface in surfaces {
            if entity.body.rect.intersects(surface.rect()) {
                entity.body.on_collision(surface);
                contacts += 1;
            }
        }
    }
    contacts
}
