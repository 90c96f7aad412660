use async_trait::async_trait;
use models::service_type::{self, Entity as ServiceTypeEntity, ServiceCategory};
use sea_orm::sea_query::{Expr, Func, LikeExpr};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
    TryIntoModel,
};

use crate::errors::ServiceError;

#[async_trait]
pub trait ServiceTypeRepository: Send + Sync {
    async fn find_all(&self) -> Result<Vec<service_type::Model>, ServiceError>;
    async fn find_by_id(&self, id: i64) -> Result<Option<service_type::Model>, ServiceError>;
    async fn find_by_service_name(&self, service_name: &str) -> Result<Option<service_type::Model>, ServiceError>;
    async fn find_by_category(&self, category: ServiceCategory) -> Result<Vec<service_type::Model>, ServiceError>;
    /// Substring match on `service_name`, case-insensitive for ASCII letters only.
    /// Other characters compare exactly, matching SQLite's `lower()`.
    async fn find_by_service_name_containing(&self, keyword: &str) -> Result<Vec<service_type::Model>, ServiceError>;
    async fn save(&self, record: service_type::ActiveModel) -> Result<service_type::Model, ServiceError>;
    async fn delete_by_id(&self, id: i64) -> Result<(), ServiceError>;
    async fn exists_by_id(&self, id: i64) -> Result<bool, ServiceError>;
}

/// Escape LIKE wildcards so the keyword matches literally.
fn like_escape(keyword: &str) -> String {
    let mut out = String::with_capacity(keyword.len());
    for c in keyword.chars() {
        if matches!(c, '\\' | '%' | '_') {
            out.push('\\');
        }
        out.push(c);
    }
    out
}

#[derive(Clone)]
pub struct SeaOrmServiceTypeRepository {
    pub db: DatabaseConnection,
}

impl SeaOrmServiceTypeRepository {
    pub fn new(db: DatabaseConnection) -> Self { Self { db } }
}

#[async_trait]
impl ServiceTypeRepository for SeaOrmServiceTypeRepository {
    async fn find_all(&self) -> Result<Vec<service_type::Model>, ServiceError> {
        ServiceTypeEntity::find()
            .order_by_asc(service_type::Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| ServiceError::Db(e.to_string()))
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<service_type::Model>, ServiceError> {
        ServiceTypeEntity::find_by_id(id).one(&self.db).await.map_err(|e| ServiceError::Db(e.to_string()))
    }

    async fn find_by_service_name(&self, service_name: &str) -> Result<Option<service_type::Model>, ServiceError> {
        ServiceTypeEntity::find()
            .filter(service_type::Column::ServiceName.eq(service_name))
            .order_by_asc(service_type::Column::Id)
            .one(&self.db)
            .await
            .map_err(|e| ServiceError::Db(e.to_string()))
    }

    async fn find_by_category(&self, category: ServiceCategory) -> Result<Vec<service_type::Model>, ServiceError> {
        ServiceTypeEntity::find()
            .filter(service_type::Column::Category.eq(category))
            .order_by_asc(service_type::Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| ServiceError::Db(e.to_string()))
    }

    async fn find_by_service_name_containing(&self, keyword: &str) -> Result<Vec<service_type::Model>, ServiceError> {
        let pattern = format!("%{}%", like_escape(&keyword.to_ascii_lowercase()));
        ServiceTypeEntity::find()
            .filter(
                Expr::expr(Func::lower(Expr::col(service_type::Column::ServiceName)))
                    .like(LikeExpr::new(pattern).escape('\\')),
            )
            .order_by_asc(service_type::Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| ServiceError::Db(e.to_string()))
    }

    async fn save(&self, record: service_type::ActiveModel) -> Result<service_type::Model, ServiceError> {
        let saved = record.save(&self.db).await.map_err(|e| ServiceError::Db(e.to_string()))?;
        saved.try_into_model().map_err(|e| ServiceError::Db(e.to_string()))
    }

    async fn delete_by_id(&self, id: i64) -> Result<(), ServiceError> {
        ServiceTypeEntity::delete_by_id(id).exec(&self.db).await.map_err(|e| ServiceError::Db(e.to_string()))?;
        Ok(())
    }

    async fn exists_by_id(&self, id: i64) -> Result<bool, ServiceError> {
        let n = ServiceTypeEntity::find_by_id(id)
            .count(&self.db)
            .await
            .map_err(|e| ServiceError::Db(e.to_string()))?;
        Ok(n > 0)
    }
}

/// Simple in-memory mock repository for tests and doc examples
pub mod mock {
    use super::*;
    use sea_orm::ActiveValue;
    use std::collections::BTreeMap;
    use std::sync::Mutex;

    #[derive(Default)]
    struct State {
        rows: BTreeMap<i64, service_type::Model>,
        last_id: i64,
    }

    #[derive(Default)]
    pub struct MockServiceTypeRepository {
        state: Mutex<State>,
    }

    impl MockServiceTypeRepository {
        fn rows_where(&self, pred: impl Fn(&service_type::Model) -> bool) -> Vec<service_type::Model> {
            let state = self.state.lock().unwrap();
            state.rows.values().filter(|m| pred(m)).cloned().collect()
        }
    }

    #[async_trait]
    impl ServiceTypeRepository for MockServiceTypeRepository {
        async fn find_all(&self) -> Result<Vec<service_type::Model>, ServiceError> {
            Ok(self.rows_where(|_| true))
        }

        async fn find_by_id(&self, id: i64) -> Result<Option<service_type::Model>, ServiceError> {
            Ok(self.state.lock().unwrap().rows.get(&id).cloned())
        }

        async fn find_by_service_name(&self, service_name: &str) -> Result<Option<service_type::Model>, ServiceError> {
            Ok(self.rows_where(|m| m.service_name == service_name).into_iter().next())
        }

        async fn find_by_category(&self, category: ServiceCategory) -> Result<Vec<service_type::Model>, ServiceError> {
            Ok(self.rows_where(|m| m.category == Some(category)))
        }

        async fn find_by_service_name_containing(&self, keyword: &str) -> Result<Vec<service_type::Model>, ServiceError> {
            let needle = keyword.to_ascii_lowercase();
            Ok(self.rows_where(|m| m.service_name.to_ascii_lowercase().contains(&needle)))
        }

        async fn save(&self, mut record: service_type::ActiveModel) -> Result<service_type::Model, ServiceError> {
            let mut state = self.state.lock().unwrap();
            let id = match &record.id {
                ActiveValue::Set(id) | ActiveValue::Unchanged(id) => {
                    if !state.rows.contains_key(id) {
                        return Err(ServiceError::Db(format!("no service type row with id {}", id)));
                    }
                    *id
                }
                ActiveValue::NotSet => {
                    state.last_id += 1;
                    state.last_id
                }
            };
            record.id = ActiveValue::Set(id);
            let model = record.try_into_model().map_err(|e| ServiceError::Db(e.to_string()))?;
            state.rows.insert(id, model.clone());
            Ok(model)
        }

        async fn delete_by_id(&self, id: i64) -> Result<(), ServiceError> {
            self.state.lock().unwrap().rows.remove(&id);
            Ok(())
        }

        async fn exists_by_id(&self, id: i64) -> Result<bool, ServiceError> {
            Ok(self.state.lock().unwrap().rows.contains_key(&id))
        }
    }
}
