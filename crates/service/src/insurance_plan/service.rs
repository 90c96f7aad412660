use std::sync::Arc;

use rust_decimal::Decimal;
use tracing::{info, instrument};

use super::dto::InsurancePlanDto;
use super::repository::InsurancePlanRepository;
use super::RESOURCE_KIND;
use crate::errors::ServiceError;

/// CRUD orchestration for insurance plans: existence checks and the mapping
/// between [`InsurancePlanDto`] and stored rows.
pub struct InsurancePlanService<R: InsurancePlanRepository> {
    repo: Arc<R>,
}

impl<R: InsurancePlanRepository> InsurancePlanService<R> {
    pub fn new(repo: Arc<R>) -> Self { Self { repo } }

    /// Persist a new plan; the returned representation carries the assigned id.
    ///
    /// # Examples
    /// ```
    /// use service::insurance_plan::{InsurancePlanDto, InsurancePlanService, repository::mock::MockInsurancePlanRepository};
    /// use rust_decimal::Decimal;
    /// use std::sync::Arc;
    /// let svc = InsurancePlanService::new(Arc::new(MockInsurancePlanRepository::default()));
    /// let input = InsurancePlanDto {
    ///     id: None,
    ///     plan_name: "Gold".into(),
    ///     monthly_premium: Decimal::new(45000, 2),
    ///     deductible: Decimal::new(100000, 2),
    ///     out_of_pocket_max: Decimal::new(500000, 2),
    /// };
    /// let created = tokio_test::block_on(svc.create(input)).unwrap();
    /// assert_eq!(created.id, Some(1));
    /// ```
    #[instrument(skip(self, input), fields(plan_name = %input.plan_name))]
    pub async fn create(&self, input: InsurancePlanDto) -> Result<InsurancePlanDto, ServiceError> {
        let record = input.to_fields()?.into_new_active_model();
        let saved = self.repo.save(record).await?;
        info!(id = saved.id, "insurance_plan_created");
        Ok(saved.into())
    }

    pub async fn list(&self) -> Result<Vec<InsurancePlanDto>, ServiceError> {
        let rows = self.repo.find_all().await?;
        Ok(rows.into_iter().map(InsurancePlanDto::from).collect())
    }

    pub async fn get_by_id(&self, id: i64) -> Result<InsurancePlanDto, ServiceError> {
        self.repo
            .find_by_id(id)
            .await?
            .map(InsurancePlanDto::from)
            .ok_or_else(|| ServiceError::not_found(RESOURCE_KIND, id))
    }

    /// Overwrite every mutable field of an existing plan. The id never changes.
    #[instrument(skip(self, input))]
    pub async fn update(&self, id: i64, input: InsurancePlanDto) -> Result<InsurancePlanDto, ServiceError> {
        if self.repo.find_by_id(id).await?.is_none() {
            return Err(ServiceError::not_found(RESOURCE_KIND, id));
        }
        let record = input.to_fields()?.into_active_model_for(id);
        let saved = self.repo.save(record).await?;
        info!(id = saved.id, "insurance_plan_updated");
        Ok(saved.into())
    }

    #[instrument(skip(self))]
    pub async fn delete_by_id(&self, id: i64) -> Result<(), ServiceError> {
        if !self.repo.exists_by_id(id).await? {
            return Err(ServiceError::not_found(RESOURCE_KIND, id));
        }
        self.repo.delete_by_id(id).await?;
        info!(id, "insurance_plan_deleted");
        Ok(())
    }

    pub async fn find_by_plan_name(&self, plan_name: &str) -> Result<Option<InsurancePlanDto>, ServiceError> {
        Ok(self.repo.find_by_plan_name(plan_name).await?.map(InsurancePlanDto::from))
    }

    /// Plans whose monthly premium is strictly below `premium`.
    pub async fn find_cheaper_than(&self, premium: Decimal) -> Result<Vec<InsurancePlanDto>, ServiceError> {
        let rows = self.repo.find_by_monthly_premium_less_than(premium).await?;
        Ok(rows.into_iter().map(InsurancePlanDto::from).collect())
    }

    pub async fn find_by_deductible_range(&self, min: Decimal, max: Decimal) -> Result<Vec<InsurancePlanDto>, ServiceError> {
        if min > max {
            return Err(ServiceError::Validation(format!("minDeductible ({min}) is greater than maxDeductible ({max})")));
        }
        let rows = self.repo.find_by_deductible_between(min, max).await?;
        Ok(rows.into_iter().map(InsurancePlanDto::from).collect())
    }
}
