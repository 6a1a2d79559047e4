//! Responsive image descriptors.
//!
//! Pictures are served by the media store with an on-the-fly `?resize=WxH`
//! query. [`build_srcset`] templates one descriptor per entry of
//! [`RESIZE_PROFILES`] into a `srcset` attribute value. No image is ever
//! inspected; the output depends on the URL only.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::InvalidImageRefError;

/// One `<width>x<height>` resize target.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ResizeProfile {
    /// Target width in pixels, also the `w` descriptor.
    pub width: u32,
    /// Target height in pixels.
    pub height: u32,
}

impl ResizeProfile {
    /// Create a profile for `width` x `height`.
    #[must_use]
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

impl fmt::Display for ResizeProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

/// Resize catalog, in descriptor order.
pub const RESIZE_PROFILES: [ResizeProfile; 6] = [
    ResizeProfile::new(300, 189),
    ResizeProfile::new(768, 485),
    ResizeProfile::new(1024, 647),
    ResizeProfile::new(1200, 758),
    ResizeProfile::new(900, 568),
    ResizeProfile::new(400, 253),
];

/// Image asset reference as stored on content documents.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageRef {
    /// Asset URL. Missing URLs deserialize as empty.
    #[serde(default)]
    pub url: String,
    /// Alternative text.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alt: Option<String>,
}

impl ImageRef {
    /// Create a reference to `url` without alternative text.
    #[must_use]
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            alt: None,
        }
    }

    /// Set the alternative text.
    #[must_use]
    pub fn with_alt(mut self, alt: impl Into<String>) -> Self {
        self.alt = Some(alt.into());
        self
    }

    /// Shorthand for [`build_srcset`].
    #[must_use]
    pub fn srcset(&self) -> String {
        build_srcset(self)
    }
}

/// How strictly image references are checked before templating.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ImageValidation {
    /// Empty URLs still produce descriptors with an empty prefix.
    #[default]
    Permissive,
    /// Blank URLs are rejected.
    Strict,
}

/// Attribute values for an `<img>` element.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ResponsiveImage {
    /// Original image URL, used as the fallback `src`.
    pub src: String,
    /// Descriptor list for the `srcset` attribute.
    pub srcset: String,
    /// Alternative text, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alt: Option<String>,
}

/// Builds `srcset` values under a validation policy.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SrcSetBuilder {
    validation: ImageValidation,
}

impl SrcSetBuilder {
    /// Create a builder applying `validation`.
    #[must_use]
    pub fn new(validation: ImageValidation) -> Self {
        Self { validation }
    }

    /// Validation policy in effect.
    #[must_use]
    pub fn validation(&self) -> ImageValidation {
        self.validation
    }

    /// Build the `srcset` value for `image`.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidImageRefError::MissingUrl`] in strict mode when the
    /// URL is blank.
    pub fn build(&self, image: &ImageRef) -> Result<String, InvalidImageRefError> {
        self.check(image)?;
        Ok(build_srcset(image))
    }

    /// Build `src`, `srcset` and `alt` for embedding `image` in markup.
    ///
    /// # Errors
    ///
    /// Same as [`SrcSetBuilder::build`].
    pub fn img_attributes(&self, image: &ImageRef) -> Result<ResponsiveImage, InvalidImageRefError> {
        let srcset = self.build(image)?;
        Ok(ResponsiveImage {
            src: image.url.clone(),
            srcset,
            alt: image.alt.clone(),
        })
    }

    fn check(&self, image: &ImageRef) -> Result<(), InvalidImageRefError> {
        if self.validation == ImageValidation::Strict && is_blank(&image.url) {
            return Err(InvalidImageRefError::MissingUrl);
        }
        Ok(())
    }
}

/// Build the `srcset` value for `image` across [`RESIZE_PROFILES`].
#[must_use]
pub fn build_srcset(image: &ImageRef) -> String {
    let url = &image.url;
    if is_blank(url) {
        tracing::warn!("Image reference has no url, descriptors use an empty prefix");
    }

    RESIZE_PROFILES
        .iter()
        .map(|profile| format!("{url}?resize={profile} {}w", profile.width))
        .collect::<Vec<_>>()
        .join(",")
}

/// Empty or whitespace-only URLs have nothing to resize.
fn is_blank(url: &str) -> bool {
    url.trim().is_empty()
}
