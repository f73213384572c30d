//! Image references and URL resolution against the asset host.
//!
//! An [`ImageRef`] is an opaque handle to an uploaded asset. Combined with an
//! [`ImageParams`] transformation request it resolves to a URL on the image
//! CDN. Resolution is pure: the same handle and parameters always produce the
//! same URL.

use std::fmt;

use serde::Deserialize;
use url::Url;

/// Host serving CMS uploads when the snapshot does not name one.
pub const DEFAULT_IMAGE_HOST: &str = "www.datocms-assets.com";

/// Handle to an uploaded image.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ImageRef {
    path: String,
}

impl ImageRef {
    /// Creates a reference from an asset path such as `/1234/photo.jpg`.
    pub fn new(path: impl Into<String>) -> Self {
        Self { path: path.into() }
    }

    /// Returns the asset path.
    pub fn path(&self) -> &str {
        &self.path
    }
}

/// Output encoding requested from the image CDN.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageFormat {
    Jpg,
    Png,
    Webp,
}

impl ImageFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            ImageFormat::Jpg => "jpg",
            ImageFormat::Png => "png",
            ImageFormat::Webp => "webp",
        }
    }
}

impl fmt::Display for ImageFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A transformation request: target size, encoding and compression.
///
/// Every call site uses one of the associated constants; parameters are never
/// derived from content.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImageParams {
    pub width: Option<u32>,
    pub height: Option<u32>,
    pub format: Option<ImageFormat>,
    pub compress: bool,
}

impl ImageParams {
    /// Hero photo on a singleton page.
    pub const PAGE_PHOTO: Self = Self::jpg(Some(800), None);
    /// Listing thumbnail for a collection entry.
    pub const COVER: Self = Self::jpg(Some(450), None);
    /// Cover image at its original size.
    pub const FULL: Self = Self::jpg(None, None);
    /// Cover image on the entry's own page.
    pub const DETAIL: Self = Self::jpg(Some(600), None);
    /// One image of an entry's gallery strip.
    pub const GALLERY_ITEM: Self = Self::jpg(None, Some(300));

    const fn jpg(width: Option<u32>, height: Option<u32>) -> Self {
        Self {
            width,
            height,
            format: Some(ImageFormat::Jpg),
            compress: true,
        }
    }

    /// Query pairs in the order they appear in the URL.
    fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::with_capacity(4);
        if self.compress {
            pairs.push(("auto", "compress".to_string()));
        }
        if let Some(format) = self.format {
            pairs.push(("fm", format.to_string()));
        }
        if let Some(height) = self.height {
            pairs.push(("h", height.to_string()));
        }
        if let Some(width) = self.width {
            pairs.push(("w", width.to_string()));
        }
        pairs
    }
}

/// Resolves image handles to CDN URLs.
#[derive(Debug, Clone)]
pub struct ImageResolver {
    base: Url,
}

impl ImageResolver {
    /// Creates a resolver for the given image host (`www.datocms-assets.com`).
    ///
    /// The host may carry a path prefix (`cdn.example.org/assets`); asset
    /// paths are resolved below it.
    ///
    /// # Errors
    ///
    /// Returns an error if the host does not form a valid URL.
    pub fn new(host: &str) -> Result<Self, url::ParseError> {
        let base = Url::parse(&format!("https://{}/", host.trim_end_matches('/')))?;
        Ok(Self { base })
    }

    /// Resolves a handle with the requested transformation.
    ///
    /// # Examples
    ///
    /// ```
    /// use cms_export::domain::{ImageParams, ImageRef, ImageResolver};
    ///
    /// let resolver = ImageResolver::new("www.datocms-assets.com").unwrap();
    /// let image = ImageRef::new("/1234/portrait.png");
    /// assert_eq!(
    ///     resolver.resolve(&image, &ImageParams::PAGE_PHOTO),
    ///     "https://www.datocms-assets.com/1234/portrait.png?auto=compress&fm=jpg&w=800"
    /// );
    /// ```
    pub fn resolve(&self, image: &ImageRef, params: &ImageParams) -> String {
        let mut url = self.base.clone();
        let prefix = self.base.path().trim_end_matches('/');
        url.set_path(&format!("{}/{}", prefix, image.path.trim_start_matches('/')));

        let pairs = params.query_pairs();
        if !pairs.is_empty() {
            url.query_pairs_mut().extend_pairs(pairs);
        }
        url.into()
    }

    /// Resolves an optional handle; a missing image stays missing.
    pub fn resolve_opt(&self, image: Option<&ImageRef>, params: &ImageParams) -> Option<String> {
        image.map(|image| self.resolve(image, params))
    }
}
