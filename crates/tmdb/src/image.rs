const IMAGE_BASE_URL: &str = "https://image.tmdb.org/t/p";

/// Default size token for card-level poster images.
pub const DEFAULT_IMAGE_SIZE: &str = "w500";

/// Build a CDN URL for an image path returned by the API.
/// Pure string construction: no network call, `None` in, `None` out.
pub fn image_url(path: Option<&str>, size: &str) -> Option<String> {
    path.map(|path| format!("{}/{}{}", IMAGE_BASE_URL, size, path))
}

/// [`image_url`] with the default poster size.
pub fn poster_url(path: Option<&str>) -> Option<String> {
    image_url(path, DEFAULT_IMAGE_SIZE)
}
