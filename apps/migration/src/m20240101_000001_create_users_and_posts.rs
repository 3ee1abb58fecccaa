use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Users::Table)
                    .if_not_exists()
                    .col(big_integer(Users::Id).auto_increment().primary_key())
                    .col(string(Users::Email).unique_key())
                    .col(string(Users::Nickname))
                    .col(string_null(Users::Address))
                    .col(string(Users::CertificationCode))
                    .col(text(Users::Status).default("PENDING"))
                    .col(timestamp_with_time_zone_null(Users::LastLoginAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Posts::Table)
                    .if_not_exists()
                    .col(big_integer(Posts::Id).auto_increment().primary_key())
                    .col(text(Posts::Content))
                    .col(big_integer(Posts::WriterId))
                    .col(timestamp_with_time_zone(Posts::CreatedAt))
                    .col(timestamp_with_time_zone_null(Posts::ModifiedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_posts_writer_id")
                            .from(Posts::Table, Posts::WriterId)
                            .to(Users::Table, Users::Id)
                            .on_update(ForeignKeyAction::Cascade)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_posts_writer_id")
                    .table(Posts::Table)
                    .col(Posts::WriterId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Posts::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(Users::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum Users {
    Table,
    Id,
    Email,
    Nickname,
    Address,
    CertificationCode,
    Status,
    LastLoginAt,
}

#[derive(DeriveIden)]
enum Posts {
    Table,
    Id,
    Content,
    WriterId,
    CreatedAt,
    ModifiedAt,
}
