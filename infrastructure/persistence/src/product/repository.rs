use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use business::domain::errors::RepositoryError;
use business::domain::product::model::{Product, ProductUpdate};
use business::domain::product::repository::ProductRepository;

use super::entity::ProductEntity;

pub struct ProductRepositoryPostgres {
    pool: PgPool,
}

impl ProductRepositoryPostgres {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn database_error(e: sqlx::Error) -> RepositoryError {
    tracing::error!("Document store error: {}", e);
    RepositoryError::DatabaseError
}

#[async_trait]
impl ProductRepository for ProductRepositoryPostgres {
    async fn get_all(&self) -> Result<Vec<Product>, RepositoryError> {
        let entities = sqlx::query_as::<_, ProductEntity>(
            "SELECT id, document, created_at, updated_at FROM products ORDER BY created_at ASC",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(database_error)?;

        entities.into_iter().map(|e| e.into_domain()).collect()
    }

    async fn save(&self, product: &Product) -> Result<(), RepositoryError> {
        let entity = ProductEntity::from_domain(product);

        sqlx::query(
            "INSERT INTO products (id, document, created_at, updated_at) VALUES ($1, $2, $3, $4)",
        )
        .bind(entity.id)
        .bind(&entity.document)
        .bind(entity.created_at)
        .bind(entity.updated_at)
        .execute(&self.pool)
        .await
        .map_err(database_error)?;

        Ok(())
    }

    async fn update(&self, id: Uuid, update: &ProductUpdate) -> Result<Product, RepositoryError> {
        // Absent fields become JSON nulls and are stripped, so only provided
        // keys overwrite the stored document.
        let entity = sqlx::query_as::<_, ProductEntity>(
            r#"UPDATE products
            SET document = document || jsonb_strip_nulls(jsonb_build_object(
                    'name', $2::text,
                    'price', $3::float8,
                    'image', $4::text)),
                updated_at = $5
            WHERE id = $1
            RETURNING id, document, created_at, updated_at"#,
        )
        .bind(id)
        .bind(update.name.as_deref())
        .bind(update.price.map(|p| p.value()))
        .bind(update.image.as_deref())
        .bind(update.updated_at)
        .fetch_optional(&self.pool)
        .await
        .map_err(database_error)?
        .ok_or(RepositoryError::NotFound)?;

        entity.into_domain()
    }

    async fn delete(&self, id: Uuid) -> Result<(), RepositoryError> {
        let result = sqlx::query("DELETE FROM products WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(database_error)?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound);
        }

        Ok(())
    }
}
