pub mod comment_syntax;

pub use comment_syntax::CommentSyntax;
