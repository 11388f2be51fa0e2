use std::fmt;

/// A content collection exposed by the REST API.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Collection {
    Faqs,
    Reviews,
    Classes,
    Gallery,
    Banners,
}

impl Collection {
    pub const ALL: [Collection; 5] = [
        Collection::Faqs,
        Collection::Reviews,
        Collection::Classes,
        Collection::Gallery,
        Collection::Banners,
    ];

    /// Path of the collection's endpoint, relative to the API base URL.
    pub fn path(self) -> &'static str {
        match self {
            Collection::Faqs => "/api/faqs",
            Collection::Reviews => "/api/reviews",
            Collection::Classes => "/api/classes",
            Collection::Gallery => "/api/gallery",
            Collection::Banners => "/api/banners",
        }
    }

    /// Whether items carry a position and can be moved up or down.
    pub fn is_positioned(self) -> bool {
        !matches!(self, Collection::Banners)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Collection::Faqs => "faqs",
            Collection::Reviews => "reviews",
            Collection::Classes => "classes",
            Collection::Gallery => "gallery",
            Collection::Banners => "banners",
        }
    }
}

impl fmt::Display for Collection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
