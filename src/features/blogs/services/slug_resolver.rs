use crate::modules::store::{BlogStore, StoreResult};
use crate::shared::slug::{slugify, with_suffix};

/// Pick the slug for a new blog.
///
/// The normalized title is used as-is when no blog owns it yet; otherwise a
/// random suffix is appended. A title that normalizes to nothing gets the
/// suffix alone. The check is advisory: the store's unique constraint is the
/// final arbiter and the caller retries on [`StoreError::SlugTaken`].
///
/// [`StoreError::SlugTaken`]: crate::modules::store::StoreError::SlugTaken
pub async fn resolve_slug<S>(store: &S, title: &str) -> StoreResult<String>
where
    S: BlogStore + ?Sized,
{
    let base = slugify(title);

    if base.is_empty() || store.slug_exists(&base).await? {
        return Ok(with_suffix(&base));
    }

    Ok(base)
}
