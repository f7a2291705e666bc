use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // ==================== 记录集合表 ====================
        // 每个集合（学生、成绩）整体序列化为一行，写入时整行替换
        manager
            .create_table(
                Table::create()
                    .table(RecordBlobs::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(RecordBlobs::Key)
                            .string()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(RecordBlobs::Value).text().not_null())
                    .col(
                        ColumnDef::new(RecordBlobs::UpdatedAt)
                            .big_integer()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(RecordBlobs::Table).to_owned())
            .await?;
        Ok(())
    }
}

#[derive(DeriveIden)]
enum RecordBlobs {
    #[sea_orm(iden = "record_blobs")]
    Table,
    Key,
    Value,
    UpdatedAt,
}
