//! Identity resolution for the training path.

use tracing::{debug, info};

use crate::client::GalleryClient;
use crate::error::GalleryResult;
use crate::types::Face;

/// Bind detected faces to the identity with the given name, creating it if
/// it does not exist yet.
///
/// The search includes hidden identities: the backend may hide identities
/// created by earlier training calls. Lookup always precedes creation, so a
/// name that already resolves never triggers a create call; within one call
/// at most one identity is created per name (after the first miss creates
/// it, subsequent lookups find it).
///
/// Returns whether at least one face was bound. An empty face list returns
/// `false` without touching the identity store.
pub async fn bind_faces_to_identity(
    client: &GalleryClient,
    faces: &[Face],
    name: &str,
) -> GalleryResult<bool> {
    if faces.is_empty() {
        return Ok(false);
    }

    for face in faces {
        let people = client.search_people(name).await?;
        let person = match people.into_iter().next() {
            Some(person) => person,
            None => {
                info!(name = %name, "identity not found, creating");
                client.create_person(name).await?
            }
        };
        client.assign_face(&face.id, &person.id).await?;
        debug!(face_id = %face.id, person_id = %person.id, "bound face to identity");
    }

    Ok(true)
}
