//! Initial schema: registry entities and the unique constraints the
//! concurrency model relies on.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    #[allow(clippy::too_many_lines)]
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Households::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Households::Id).uuid().not_null().primary_key())
                    .col(
                        ColumnDef::new(Households::Code)
                            .string_len(64)
                            .not_null()
                            .unique_key(),
                    )
                    .col(
                        ColumnDef::new(Households::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Citizens::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Citizens::Id).uuid().not_null().primary_key())
                    .col(
                        ColumnDef::new(Citizens::Nid)
                            .string_len(32)
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(Citizens::NameEn).string().not_null())
                    .col(ColumnDef::new(Citizens::NameBn).string().not_null())
                    .col(ColumnDef::new(Citizens::FatherNameEn).string().not_null())
                    .col(ColumnDef::new(Citizens::FatherNameBn).string().not_null())
                    .col(ColumnDef::new(Citizens::MotherNameEn).string().not_null())
                    .col(ColumnDef::new(Citizens::MotherNameBn).string().not_null())
                    .col(ColumnDef::new(Citizens::Phone).string_len(32).not_null())
                    .col(ColumnDef::new(Citizens::DateOfBirth).date().not_null())
                    .col(ColumnDef::new(Citizens::Gender).string_len(16).not_null())
                    .col(ColumnDef::new(Citizens::HouseholdId).uuid().null())
                    .col(ColumnDef::new(Citizens::Village).string().not_null())
                    .col(ColumnDef::new(Citizens::PostOffice).string().not_null())
                    .col(ColumnDef::new(Citizens::PostalCode).string_len(16).not_null())
                    .col(ColumnDef::new(Citizens::District).string().not_null())
                    .col(ColumnDef::new(Citizens::Status).string_len(16).not_null())
                    .col(
                        ColumnDef::new(Citizens::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(Citizens::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_citizens_household")
                            .from(Citizens::Table, Citizens::HouseholdId)
                            .to(Households::Table, Households::Id)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .to_owned(),
            )
            .await?;

        // Identification matches on (nid, date_of_birth)
        manager
            .create_index(
                Index::create()
                    .name("idx_citizens_nid_dob")
                    .table(Citizens::Table)
                    .col(Citizens::Nid)
                    .col(Citizens::DateOfBirth)
                    .to_owned(),
            )
            .await?;

        // Household membership lookups for tax compliance
        manager
            .create_index(
                Index::create()
                    .name("idx_citizens_household")
                    .table(Citizens::Table)
                    .col(Citizens::HouseholdId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Administrators::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Administrators::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Administrators::Username)
                            .string_len(64)
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(Administrators::PasswordHash).string().not_null())
                    .col(ColumnDef::new(Administrators::FullName).string().not_null())
                    .col(ColumnDef::new(Administrators::Email).string().null())
                    .col(
                        ColumnDef::new(Administrators::IsActive)
                            .boolean()
                            .not_null()
                            .default(true),
                    )
                    .col(
                        ColumnDef::new(Administrators::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(Administrators::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(CertificateTypes::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(CertificateTypes::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(CertificateTypes::Kind).string_len(32).not_null())
                    .col(ColumnDef::new(CertificateTypes::NameEn).string().not_null())
                    .col(ColumnDef::new(CertificateTypes::NameBn).string().not_null())
                    .col(
                        ColumnDef::new(CertificateTypes::Fee)
                            .decimal_len(19, 4)
                            .not_null(),
                    )
                    .col(ColumnDef::new(CertificateTypes::Template).text().null())
                    .col(
                        ColumnDef::new(CertificateTypes::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(CertificateTypes::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Certificates::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Certificates::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Certificates::CitizenId).uuid().null())
                    .col(ColumnDef::new(Certificates::ApplicantName).string().null())
                    .col(
                        ColumnDef::new(Certificates::CertificateTypeId)
                            .uuid()
                            .not_null(),
                    )
                    .col(ColumnDef::new(Certificates::Status).string_len(16).not_null())
                    .col(
                        ColumnDef::new(Certificates::CertificateNumber)
                            .string_len(17)
                            .null()
                            .unique_key(),
                    )
                    .col(
                        ColumnDef::new(Certificates::IssuedAt)
                            .timestamp_with_time_zone()
                            .null(),
                    )
                    .col(
                        ColumnDef::new(Certificates::FeePaid)
                            .decimal_len(19, 4)
                            .not_null(),
                    )
                    .col(ColumnDef::new(Certificates::Payload).json_binary().not_null())
                    .col(
                        ColumnDef::new(Certificates::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(Certificates::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_certificates_citizen")
                            .from(Certificates::Table, Certificates::CitizenId)
                            .to(Citizens::Table, Citizens::Id)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_certificates_type")
                            .from(Certificates::Table, Certificates::CertificateTypeId)
                            .to(CertificateTypes::Table, CertificateTypes::Id)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_certificates_status")
                    .table(Certificates::Table)
                    .col(Certificates::Status)
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(TaxRecords::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(TaxRecords::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(TaxRecords::CitizenId).uuid().not_null())
                    .col(ColumnDef::new(TaxRecords::HouseholdId).uuid().null())
                    .col(
                        ColumnDef::new(TaxRecords::FiscalYear)
                            .string_len(9)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(TaxRecords::Amount)
                            .decimal_len(19, 4)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(TaxRecords::ReceiptNumber)
                            .string_len(16)
                            .not_null()
                            .unique_key(),
                    )
                    .col(
                        ColumnDef::new(TaxRecords::PaidAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_tax_records_citizen")
                            .from(TaxRecords::Table, TaxRecords::CitizenId)
                            .to(Citizens::Table, Citizens::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_tax_records_household")
                            .from(TaxRecords::Table, TaxRecords::HouseholdId)
                            .to(Households::Table, Households::Id)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .to_owned(),
            )
            .await?;

        // One direct payment per citizen per fiscal year
        manager
            .create_index(
                Index::create()
                    .name("uq_tax_records_citizen_year")
                    .table(TaxRecords::Table)
                    .col(TaxRecords::CitizenId)
                    .col(TaxRecords::FiscalYear)
                    .unique()
                    .to_owned(),
            )
            .await?;

        // One payment per household per fiscal year; NULL household rows
        // (citizens outside any household) never collide
        manager
            .create_index(
                Index::create()
                    .name("uq_tax_records_household_year")
                    .table(TaxRecords::Table)
                    .col(TaxRecords::HouseholdId)
                    .col(TaxRecords::FiscalYear)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(VerificationTokens::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(VerificationTokens::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(VerificationTokens::Email)
                            .string()
                            .not_null()
                            .unique_key(),
                    )
                    .col(
                        ColumnDef::new(VerificationTokens::CodeHash)
                            .string_len(64)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(VerificationTokens::Purpose)
                            .string_len(32)
                            .not_null(),
                    )
                    .col(ColumnDef::new(VerificationTokens::AdminId).uuid().not_null())
                    .col(
                        ColumnDef::new(VerificationTokens::ExpiresAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(VerificationTokens::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_verification_tokens_admin")
                            .from(VerificationTokens::Table, VerificationTokens::AdminId)
                            .to(Administrators::Table, Administrators::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(LedgerEntries::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(LedgerEntries::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(LedgerEntries::Source).string_len(16).not_null())
                    .col(ColumnDef::new(LedgerEntries::SourceId).uuid().not_null())
                    .col(ColumnDef::new(LedgerEntries::CitizenId).uuid().null())
                    .col(
                        ColumnDef::new(LedgerEntries::Amount)
                            .decimal_len(19, 4)
                            .not_null(),
                    )
                    .col(ColumnDef::new(LedgerEntries::Description).string().not_null())
                    .col(
                        ColumnDef::new(LedgerEntries::RecordedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_ledger_entries_source")
                    .table(LedgerEntries::Table)
                    .col(LedgerEntries::Source)
                    .col(LedgerEntries::SourceId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Notifications::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Notifications::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Notifications::Title).string().not_null())
                    .col(ColumnDef::new(Notifications::Message).text().not_null())
                    .col(
                        ColumnDef::new(Notifications::Severity)
                            .string_len(16)
                            .not_null(),
                    )
                    .col(ColumnDef::new(Notifications::Link).string().null())
                    .col(
                        ColumnDef::new(Notifications::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Notifications::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(LedgerEntries::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(VerificationTokens::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(TaxRecords::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Certificates::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(CertificateTypes::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Administrators::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Citizens::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Households::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Households {
    Table,
    Id,
    Code,
    CreatedAt,
}

#[derive(DeriveIden)]
enum Citizens {
    Table,
    Id,
    Nid,
    NameEn,
    NameBn,
    FatherNameEn,
    FatherNameBn,
    MotherNameEn,
    MotherNameBn,
    Phone,
    DateOfBirth,
    Gender,
    HouseholdId,
    Village,
    PostOffice,
    PostalCode,
    District,
    Status,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Administrators {
    Table,
    Id,
    Username,
    PasswordHash,
    FullName,
    Email,
    IsActive,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum CertificateTypes {
    Table,
    Id,
    Kind,
    NameEn,
    NameBn,
    Fee,
    Template,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Certificates {
    Table,
    Id,
    CitizenId,
    ApplicantName,
    CertificateTypeId,
    Status,
    CertificateNumber,
    IssuedAt,
    FeePaid,
    Payload,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum TaxRecords {
    Table,
    Id,
    CitizenId,
    HouseholdId,
    FiscalYear,
    Amount,
    ReceiptNumber,
    PaidAt,
}

#[derive(DeriveIden)]
enum VerificationTokens {
    Table,
    Id,
    Email,
    CodeHash,
    Purpose,
    AdminId,
    ExpiresAt,
    CreatedAt,
}

#[derive(DeriveIden)]
enum LedgerEntries {
    Table,
    Id,
    Source,
    SourceId,
    CitizenId,
    Amount,
    Description,
    RecordedAt,
}

#[derive(DeriveIden)]
enum Notifications {
    Table,
    Id,
    Title,
    Message,
    Severity,
    Link,
    CreatedAt,
}
