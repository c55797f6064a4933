//! Document content: front-matter parsing and mutation-variables building

mod cover;
mod document;
mod frontmatter;

pub use cover::resolve_cover_id;
pub use document::build_variables;
pub use frontmatter::FrontMatter;
