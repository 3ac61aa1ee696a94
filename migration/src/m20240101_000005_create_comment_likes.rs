use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(CommentLikes::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(CommentLikes::Id)
                            .string()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(CommentLikes::CommentId).string().not_null())
                    .col(ColumnDef::new(CommentLikes::Owner).string().not_null())
                    .col(
                        ColumnDef::new(CommentLikes::IsDeleted)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_comment_likes_comment")
                            .from(CommentLikes::Table, CommentLikes::CommentId)
                            .to(Comments::Table, Comments::Id),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_comment_likes_owner")
                            .from(CommentLikes::Table, CommentLikes::Owner)
                            .to(Users::Table, Users::Id),
                    )
                    .to_owned(),
            )
            .await?;

        // One like row per (owner, comment); toggling flips is_deleted
        manager
            .create_index(
                Index::create()
                    .name("idx_comment_likes_owner_comment")
                    .table(CommentLikes::Table)
                    .col(CommentLikes::Owner)
                    .col(CommentLikes::CommentId)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(CommentLikes::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum CommentLikes {
    Table,
    Id,
    CommentId,
    Owner,
    IsDeleted,
}

#[derive(DeriveIden)]
enum Comments {
    Table,
    Id,
}

#[derive(DeriveIden)]
enum Users {
    Table,
    Id,
}
