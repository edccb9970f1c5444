use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Create the platform's schema
        manager
            .get_connection()
            .execute_unprepared("CREATE SCHEMA IF NOT EXISTS reunion_platform;")
            .await?;

        manager
            .get_connection()
            .execute_unprepared("SET search_path TO reunion_platform, public;")
            .await?;

        // Grant the base DB user that will execute all platform queries
        manager
            .get_connection()
            .execute_unprepared(r#"
                DO $$ BEGIN
                    GRANT ALL PRIVILEGES ON DATABASE reunion TO reunion;
                    GRANT ALL ON SCHEMA reunion_platform TO reunion;

                    ALTER DEFAULT PRIVILEGES IN SCHEMA reunion_platform GRANT ALL ON TABLES TO reunion;
                    ALTER DEFAULT PRIVILEGES IN SCHEMA reunion_platform GRANT ALL ON SEQUENCES TO reunion;
                    ALTER DEFAULT PRIVILEGES IN SCHEMA reunion_platform GRANT ALL ON FUNCTIONS TO reunion;
                END $$;
            "#)
            .await?;

        // Account roles are a closed set enforced by the database
        manager
            .get_connection()
            .execute_unprepared(
                "CREATE TYPE reunion_platform.role AS ENUM ('utilisateur', 'admin');",
            )
            .await?;

        manager
            .get_connection()
            .execute_unprepared(
                r#"
            CREATE TABLE IF NOT EXISTS reunion_platform.users (
                id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
                name VARCHAR(255) NOT NULL,
                email VARCHAR(255) NOT NULL,
                password VARCHAR(255) NOT NULL,
                role reunion_platform.role NOT NULL DEFAULT 'utilisateur',
                created_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),
                updated_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),

                CONSTRAINT users_email_unique UNIQUE(email)
            )
        "#,
            )
            .await?;

        // user_id is deliberately not a foreign key: meetings are accepted for
        // any id the caller supplies
        manager
            .get_connection()
            .execute_unprepared(
                r#"
            CREATE TABLE IF NOT EXISTS reunion_platform.meetings (
                id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
                subject VARCHAR(255) NOT NULL,
                date VARCHAR(255) NOT NULL,
                time VARCHAR(255) NOT NULL,
                participant_count INTEGER NOT NULL,
                user_id UUID NOT NULL,
                created_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),
                updated_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
            )
        "#,
            )
            .await?;

        manager
            .get_connection()
            .execute_unprepared(
                r#"
            CREATE TABLE IF NOT EXISTS reunion_platform.transcriptions (
                id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
                audio_path VARCHAR(255) NOT NULL,
                transcript TEXT NOT NULL,
                created_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),
                updated_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
            )
        "#,
            )
            .await?;

        // Set ownership to the reunion user for proper permissions
        for table in ["users", "meetings", "transcriptions"] {
            manager
                .get_connection()
                .execute_unprepared(&format!(
                    "ALTER TABLE reunion_platform.{table} OWNER TO reunion"
                ))
                .await?;
        }

        // Logins look accounts up by email
        manager
            .get_connection()
            .execute_unprepared(
                "CREATE INDEX IF NOT EXISTS idx_users_email
                 ON reunion_platform.users(email)",
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Revoke default privileges first
        manager
            .get_connection()
            .execute_unprepared(r#"
                DO $$ BEGIN
                    ALTER DEFAULT PRIVILEGES IN SCHEMA reunion_platform REVOKE ALL ON FUNCTIONS FROM reunion;
                    ALTER DEFAULT PRIVILEGES IN SCHEMA reunion_platform REVOKE ALL ON SEQUENCES FROM reunion;
                    ALTER DEFAULT PRIVILEGES IN SCHEMA reunion_platform REVOKE ALL ON TABLES FROM reunion;
                    REVOKE ALL ON SCHEMA reunion_platform FROM reunion;
                    REVOKE ALL PRIVILEGES ON DATABASE reunion FROM reunion;
                END $$;
            "#)
            .await?;

        // Drop the schema (CASCADE will remove all objects in it)
        manager
            .get_connection()
            .execute_unprepared("DROP SCHEMA IF EXISTS reunion_platform CASCADE;")
            .await?;

        Ok(())
    }
}
