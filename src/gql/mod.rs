//! GraphQL statements and transport
//!
//! The statement table is an explicit (category x operation) mapping with no
//! default branch, so an unhandled combination fails at compile time instead
//! of sending a malformed query. The statements are written against the
//! Payload-generated schema of the target CMS and must match it exactly.

mod client;

pub use client::{GqlClient, GqlResponse, GqlTransport};

use crate::classify::{OperationKind, WritingCategory};

const GET_BLOG: &str = "
query ($id: String!) {
  Blog(id: $id) { id }
}
";

const GET_NOTE: &str = "
query ($id: String!) {
  Note(id: $id) { id }
}
";

const DELETE_BLOG: &str = "
mutation ($id: String!) {
  deleteBlog(id: $id)
}
";

const DELETE_NOTE: &str = "
mutation ($id: String!) {
  deleteNote(id: $id)
}
";

const CREATE_BLOG: &str = "
mutation (
    $id: String!,
    $role: Blog_role_MutationInput!,
    $title: String!,
    $description: String!,
    $content: String!,
    $tags: [String!]!,
    $createdDate: String!,
    $lastUpdatedDate: String!,
    $featured: Boolean!,
    $cover: Int!,
    $hasLinkTo: [Blog_HasLinkToRelationshipInput]
) {
    createBlog(
        data: {
            id: $id,
            role: $role,
            title: $title,
            description: $description,
            content: $content,
            tags: $tags,
            createdDate: $createdDate,
            lastUpdatedDate: $lastUpdatedDate,
            featured: $featured,
            cover: $cover,
            hasLinkTo: $hasLinkTo,
        }
    ) { id }
}
";

const UPDATE_BLOG: &str = "
mutation (
    $id: String!,
    $role: BlogUpdate_role_MutationInput!,
    $title: String!,
    $description: String!,
    $content: String!,
    $tags: [String!]!,
    $createdDate: String!,
    $lastUpdatedDate: String!,
    $featured: Boolean!,
    $cover: Int!,
    $hasLinkTo: [BlogUpdate_HasLinkToRelationshipInput]
) {
    updateBlog(
        id: $id,
        data: {
            role: $role,
            title: $title,
            description: $description,
            content: $content,
            tags: $tags,
            createdDate: $createdDate,
            lastUpdatedDate: $lastUpdatedDate,
            featured: $featured,
            cover: $cover,
            hasLinkTo: $hasLinkTo,
        }
    ) { id }
}
";

const CREATE_NOTE: &str = "
mutation (
    $id: String!,
    $role: Note_role_MutationInput!,
    $title: String!,
    $content: String!,
    $tags: [String!]!,
    $createdDate: String!,
    $lastUpdatedDate: String!,
    $hasLinkTo: [Note_HasLinkToRelationshipInput]
) {
    createNote(
        data: {
            id: $id,
            role: $role,
            title: $title,
            content: $content,
            tags: $tags,
            createdDate: $createdDate,
            lastUpdatedDate: $lastUpdatedDate,
            hasLinkTo: $hasLinkTo,
        }
    ) { id }
}
";

const UPDATE_NOTE: &str = "
mutation (
    $id: String!,
    $role: NoteUpdate_role_MutationInput!,
    $title: String!,
    $content: String!,
    $tags: [String!]!,
    $createdDate: String!,
    $lastUpdatedDate: String!,
    $hasLinkTo: [NoteUpdate_HasLinkToRelationshipInput]
) {
    updateNote(
        id: $id,
        data: {
            role: $role,
            title: $title,
            content: $content,
            tags: $tags,
            createdDate: $createdDate,
            lastUpdatedDate: $lastUpdatedDate,
            hasLinkTo: $hasLinkTo,
        }
    ) { id }
}
";

/// Media lookup by exact filename, used to resolve a blog cover to its id.
pub const MEDIA_BY_FILENAME: &str = "
query ($name: String!) {
    allMedia ( where: { filename: { equals: $name } } ) {
        docs { id }
    }
}
";

/// The existence-check query for a category.
pub fn get_by_id(category: WritingCategory) -> &'static str {
    match category {
        WritingCategory::Blog => GET_BLOG,
        WritingCategory::Note => GET_NOTE,
    }
}

/// The mutation for a (category, operation) pair. `Skip` carries no statement.
pub fn statement(category: WritingCategory, operation: OperationKind) -> Option<&'static str> {
    match (category, operation) {
        (WritingCategory::Blog, OperationKind::Create) => Some(CREATE_BLOG),
        (WritingCategory::Blog, OperationKind::Update) => Some(UPDATE_BLOG),
        (WritingCategory::Blog, OperationKind::Delete) => Some(DELETE_BLOG),
        (WritingCategory::Blog, OperationKind::Skip) => None,
        (WritingCategory::Note, OperationKind::Create) => Some(CREATE_NOTE),
        (WritingCategory::Note, OperationKind::Update) => Some(UPDATE_NOTE),
        (WritingCategory::Note, OperationKind::Delete) => Some(DELETE_NOTE),
        (WritingCategory::Note, OperationKind::Skip) => None,
    }
}
