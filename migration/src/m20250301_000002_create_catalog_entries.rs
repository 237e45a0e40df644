use sea_orm_migration::prelude::*;

use crate::m20250301_000001_create_domains::Domains;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(CatalogEntries::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(CatalogEntries::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(CatalogEntries::Title).string().not_null())
                    .col(ColumnDef::new(CatalogEntries::Description).text().not_null())
                    .col(
                        ColumnDef::new(CatalogEntries::Source)
                            .string_len(50)
                            .not_null(),
                    )
                    .col(ColumnDef::new(CatalogEntries::SourceId).string().not_null())
                    .col(
                        ColumnDef::new(CatalogEntries::SourceUrl)
                            .string()
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(CatalogEntries::Owner).string().not_null())
                    .col(ColumnDef::new(CatalogEntries::RepoName).string().not_null())
                    .col(ColumnDef::new(CatalogEntries::BaseName).string().not_null())
                    .col(ColumnDef::new(CatalogEntries::Branch).string().not_null())
                    .col(ColumnDef::new(CatalogEntries::DownloadUrl).string().not_null())
                    .col(ColumnDef::new(CatalogEntries::LiveDemoUrl).string())
                    .col(
                        ColumnDef::new(CatalogEntries::Stars)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(CatalogEntries::Forks)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(ColumnDef::new(CatalogEntries::Language).string())
                    .col(ColumnDef::new(CatalogEntries::TechStack).json().not_null())
                    .col(
                        ColumnDef::new(CatalogEntries::Difficulty)
                            .string_len(10)
                            .not_null(),
                    )
                    .col(ColumnDef::new(CatalogEntries::Topics).json().not_null())
                    .col(ColumnDef::new(CatalogEntries::DomainId).uuid().not_null())
                    .col(ColumnDef::new(CatalogEntries::CaseStudy).text().not_null())
                    .col(
                        ColumnDef::new(CatalogEntries::ProblemStatement)
                            .text()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(CatalogEntries::SolutionDescription)
                            .text()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(CatalogEntries::Prerequisites)
                            .json()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(CatalogEntries::Deliverables)
                            .json()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(CatalogEntries::DownloadCount)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(CatalogEntries::LikeCount)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(CatalogEntries::IsActive)
                            .boolean()
                            .not_null()
                            .default(true),
                    )
                    .col(
                        ColumnDef::new(CatalogEntries::ReviewStatus)
                            .string_len(20)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(CatalogEntries::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(CatalogEntries::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_catalog_entries_domain")
                            .from(CatalogEntries::Table, CatalogEntries::DomainId)
                            .to(Domains::Table, Domains::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_catalog_entries_domain_source")
                    .table(CatalogEntries::Table)
                    .col(CatalogEntries::DomainId)
                    .col(CatalogEntries::Source)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_catalog_entries_domain_base_name")
                    .table(CatalogEntries::Table)
                    .col(CatalogEntries::DomainId)
                    .col(CatalogEntries::BaseName)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(CatalogEntries::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum CatalogEntries {
    Table,
    Id,
    Title,
    Description,
    Source,
    SourceId,
    SourceUrl,
    Owner,
    RepoName,
    BaseName,
    Branch,
    DownloadUrl,
    LiveDemoUrl,
    Stars,
    Forks,
    Language,
    TechStack,
    Difficulty,
    Topics,
    DomainId,
    CaseStudy,
    ProblemStatement,
    SolutionDescription,
    Prerequisites,
    Deliverables,
    DownloadCount,
    LikeCount,
    IsActive,
    ReviewStatus,
    CreatedAt,
    UpdatedAt,
}
