use async_trait::async_trait;
use models::insurance_plan::{self, Entity as InsurancePlanEntity};
use rust_decimal::Decimal;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
    TryIntoModel,
};

use crate::errors::ServiceError;

/// Data access for the `insurance_plans` table. Every call is one round-trip.
#[async_trait]
pub trait InsurancePlanRepository: Send + Sync {
    async fn find_all(&self) -> Result<Vec<insurance_plan::Model>, ServiceError>;
    async fn find_by_id(&self, id: i64) -> Result<Option<insurance_plan::Model>, ServiceError>;
    async fn find_by_plan_name(&self, plan_name: &str) -> Result<Option<insurance_plan::Model>, ServiceError>;
    async fn find_by_monthly_premium_less_than(&self, premium: Decimal) -> Result<Vec<insurance_plan::Model>, ServiceError>;
    /// Inclusive on both ends.
    async fn find_by_deductible_between(&self, min: Decimal, max: Decimal) -> Result<Vec<insurance_plan::Model>, ServiceError>;
    /// Insert when `id` is not set, otherwise overwrite the row with that id.
    async fn save(&self, record: insurance_plan::ActiveModel) -> Result<insurance_plan::Model, ServiceError>;
    async fn delete_by_id(&self, id: i64) -> Result<(), ServiceError>;
    async fn exists_by_id(&self, id: i64) -> Result<bool, ServiceError>;
}

/// SeaORM-backed repository implementation.
#[derive(Clone)]
pub struct SeaOrmInsurancePlanRepository {
    pub db: DatabaseConnection,
}

impl SeaOrmInsurancePlanRepository {
    pub fn new(db: DatabaseConnection) -> Self { Self { db } }
}

#[async_trait]
impl InsurancePlanRepository for SeaOrmInsurancePlanRepository {
    async fn find_all(&self) -> Result<Vec<insurance_plan::Model>, ServiceError> {
        InsurancePlanEntity::find()
            .order_by_asc(insurance_plan::Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| ServiceError::Db(e.to_string()))
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<insurance_plan::Model>, ServiceError> {
        InsurancePlanEntity::find_by_id(id).one(&self.db).await.map_err(|e| ServiceError::Db(e.to_string()))
    }

    async fn find_by_plan_name(&self, plan_name: &str) -> Result<Option<insurance_plan::Model>, ServiceError> {
        InsurancePlanEntity::find()
            .filter(insurance_plan::Column::PlanName.eq(plan_name))
            .order_by_asc(insurance_plan::Column::Id)
            .one(&self.db)
            .await
            .map_err(|e| ServiceError::Db(e.to_string()))
    }

    async fn find_by_monthly_premium_less_than(&self, premium: Decimal) -> Result<Vec<insurance_plan::Model>, ServiceError> {
        InsurancePlanEntity::find()
            .filter(insurance_plan::Column::MonthlyPremium.lt(premium))
            .order_by_asc(insurance_plan::Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| ServiceError::Db(e.to_string()))
    }

    async fn find_by_deductible_between(&self, min: Decimal, max: Decimal) -> Result<Vec<insurance_plan::Model>, ServiceError> {
        InsurancePlanEntity::find()
            .filter(insurance_plan::Column::Deductible.between(min, max))
            .order_by_asc(insurance_plan::Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| ServiceError::Db(e.to_string()))
    }

    async fn save(&self, record: insurance_plan::ActiveModel) -> Result<insurance_plan::Model, ServiceError> {
        let saved = record.save(&self.db).await.map_err(|e| ServiceError::Db(e.to_string()))?;
        saved.try_into_model().map_err(|e| ServiceError::Db(e.to_string()))
    }

    async fn delete_by_id(&self, id: i64) -> Result<(), ServiceError> {
        InsurancePlanEntity::delete_by_id(id).exec(&self.db).await.map_err(|e| ServiceError::Db(e.to_string()))?;
        Ok(())
    }

    async fn exists_by_id(&self, id: i64) -> Result<bool, ServiceError> {
        let n = InsurancePlanEntity::find_by_id(id)
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
        rows: BTreeMap<i64, insurance_plan::Model>,
        last_id: i64, // ids are never handed out twice
    }

    #[derive(Default)]
    pub struct MockInsurancePlanRepository {
        state: Mutex<State>,
    }

    impl MockInsurancePlanRepository {
        fn rows_where(&self, pred: impl Fn(&insurance_plan::Model) -> bool) -> Vec<insurance_plan::Model> {
            let state = self.state.lock().unwrap();
            state.rows.values().filter(|m| pred(m)).cloned().collect()
        }
    }

    #[async_trait]
    impl InsurancePlanRepository for MockInsurancePlanRepository {
        async fn find_all(&self) -> Result<Vec<insurance_plan::Model>, ServiceError> {
            Ok(self.rows_where(|_| true))
        }

        async fn find_by_id(&self, id: i64) -> Result<Option<insurance_plan::Model>, ServiceError> {
            Ok(self.state.lock().unwrap().rows.get(&id).cloned())
        }

        async fn find_by_plan_name(&self, plan_name: &str) -> Result<Option<insurance_plan::Model>, ServiceError> {
            Ok(self.rows_where(|m| m.plan_name == plan_name).into_iter().next())
        }

        async fn find_by_monthly_premium_less_than(&self, premium: Decimal) -> Result<Vec<insurance_plan::Model>, ServiceError> {
            Ok(self.rows_where(|m| m.monthly_premium < premium))
        }

        async fn find_by_deductible_between(&self, min: Decimal, max: Decimal) -> Result<Vec<insurance_plan::Model>, ServiceError> {
            Ok(self.rows_where(|m| m.deductible >= min && m.deductible <= max))
        }

        async fn save(&self, mut record: insurance_plan::ActiveModel) -> Result<insurance_plan::Model, ServiceError> {
            let mut state = self.state.lock().unwrap();
            let id = match &record.id {
                ActiveValue::Set(id) | ActiveValue::Unchanged(id) => {
                    if !state.rows.contains_key(id) {
                        return Err(ServiceError::Db(format!("no insurance plan row with id {}", id)));
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::get_db;
    use models::insurance_plan::PlanFields;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal { Decimal::from_str(s).unwrap() }

    fn plan(name: &str, premium: &str, deductible: &str) -> insurance_plan::ActiveModel {
        PlanFields::new(name, dec(premium), dec(deductible), dec("9000")).unwrap().into_new_active_model()
    }

    #[tokio::test]
    async fn seaorm_repository_crud() -> Result<(), anyhow::Error> {
        let repo = SeaOrmInsurancePlanRepository::new(get_db().await?);

        let gold = repo.save(plan("Gold", "450", "1000")).await?;
        assert_eq!(gold.id, 1);
        assert!(repo.exists_by_id(gold.id).await?);
        assert!(!repo.exists_by_id(999).await?);

        let renamed = PlanFields::new("Gold+", dec("460"), dec("1000"), dec("5000"))?.into_active_model_for(gold.id);
        let updated = repo.save(renamed).await?;
        assert_eq!(updated.id, gold.id);
        assert_eq!(updated.plan_name, "Gold+");

        let found = repo.find_by_id(gold.id).await?.unwrap();
        assert_eq!(found.monthly_premium, dec("460"));

        repo.delete_by_id(gold.id).await?;
        assert!(repo.find_by_id(gold.id).await?.is_none());
        assert!(repo.find_all().await?.is_empty());
        Ok(())
    }

    #[tokio::test]
    async fn seaorm_repository_lookups() -> Result<(), anyhow::Error> {
        let repo = SeaOrmInsurancePlanRepository::new(get_db().await?);
        repo.save(plan("Bronze", "150", "6000")).await?;
        repo.save(plan("Silver", "300", "2500")).await?;
        repo.save(plan("Gold", "450", "1000")).await?;

        let by_name = repo.find_by_plan_name("Silver").await?.unwrap();
        assert_eq!(by_name.plan_name, "Silver");
        assert!(repo.find_by_plan_name("Platinum").await?.is_none());

        let cheap: Vec<String> = repo.find_by_monthly_premium_less_than(dec("300")).await?.into_iter().map(|m| m.plan_name).collect();
        assert_eq!(cheap, vec!["Bronze"]);

        let mid: Vec<String> = repo.find_by_deductible_between(dec("1000"), dec("2500")).await?.into_iter().map(|m| m.plan_name).collect();
        assert_eq!(mid, vec!["Silver", "Gold"]);

        let all = repo.find_all().await?;
        assert_eq!(all.iter().map(|m| m.id).collect::<Vec<_>>(), vec![1, 2, 3]);
        Ok(())
    }

    #[tokio::test]
    async fn mock_repository_never_reuses_ids() -> Result<(), anyhow::Error> {
        let repo = mock::MockInsurancePlanRepository::default();
        let a = repo.save(plan("A", "1", "1")).await?;
        let b = repo.save(plan("B", "1", "1")).await?;
        repo.delete_by_id(b.id).await?;
        let c = repo.save(plan("C", "1", "1")).await?;
        assert_eq!((a.id, b.id, c.id), (1, 2, 3));
        Ok(())
    }
}
