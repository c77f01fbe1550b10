//! Post entity for SeaORM.

use sea_orm::ActiveValue::{NotSet, Set};
use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "post")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub title: Option<String>,
    #[sea_orm(column_type = "Text")]
    pub body: Option<String>,
    pub user_id: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// Conversion from SeaORM Model to the domain Post.
impl From<Model> for talos_core::domain::Post {
    fn from(model: Model) -> Self {
        Self {
            id: Some(model.id),
            title: model.title,
            body: model.body,
            user_id: model.user_id,
        }
    }
}

/// Conversion from the domain Post to a SeaORM ActiveModel.
///
/// A post without an id maps to an unset primary key, so `save` inserts
/// and the database assigns the id.
impl From<talos_core::domain::Post> for ActiveModel {
    fn from(post: talos_core::domain::Post) -> Self {
        Self {
            id: post.id.map_or(NotSet, Set),
            title: Set(post.title),
            body: Set(post.body),
            user_id: Set(post.user_id),
        }
    }
}
