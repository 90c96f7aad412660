use std::sync::Arc;

use models::service_type::ServiceCategory;
use tracing::{info, instrument};

use super::dto::ServiceTypeDto;
use super::repository::ServiceTypeRepository;
use super::RESOURCE_KIND;
use crate::errors::ServiceError;

/// CRUD orchestration for service types.
pub struct ServiceTypeService<R: ServiceTypeRepository> {
    repo: Arc<R>,
}

impl<R: ServiceTypeRepository> ServiceTypeService<R> {
    pub fn new(repo: Arc<R>) -> Self { Self { repo } }

    #[instrument(skip(self, input), fields(service_name = %input.service_name))]
    pub async fn create(&self, input: ServiceTypeDto) -> Result<ServiceTypeDto, ServiceError> {
        let record = input.to_fields()?.into_new_active_model();
        let saved = self.repo.save(record).await?;
        info!(id = saved.id, "service_type_created");
        Ok(saved.into())
    }

    pub async fn list(&self) -> Result<Vec<ServiceTypeDto>, ServiceError> {
        let rows = self.repo.find_all().await?;
        Ok(rows.into_iter().map(ServiceTypeDto::from).collect())
    }

    pub async fn get_by_id(&self, id: i64) -> Result<ServiceTypeDto, ServiceError> {
        self.repo
            .find_by_id(id)
            .await?
            .map(ServiceTypeDto::from)
            .ok_or_else(|| ServiceError::not_found(RESOURCE_KIND, id))
    }

    /// Full replacement: an omitted `description` or `category` clears the column.
    #[instrument(skip(self, input))]
    pub async fn update(&self, id: i64, input: ServiceTypeDto) -> Result<ServiceTypeDto, ServiceError> {
        if self.repo.find_by_id(id).await?.is_none() {
            return Err(ServiceError::not_found(RESOURCE_KIND, id));
        }
        let record = input.to_fields()?.into_active_model_for(id);
        let saved = self.repo.save(record).await?;
        info!(id = saved.id, "service_type_updated");
        Ok(saved.into())
    }

    #[instrument(skip(self))]
    pub async fn delete_by_id(&self, id: i64) -> Result<(), ServiceError> {
        if !self.repo.exists_by_id(id).await? {
            return Err(ServiceError::not_found(RESOURCE_KIND, id));
        }
        self.repo.delete_by_id(id).await?;
        info!(id, "service_type_deleted");
        Ok(())
    }

    pub async fn find_by_service_name(&self, service_name: &str) -> Result<Option<ServiceTypeDto>, ServiceError> {
        Ok(self.repo.find_by_service_name(service_name).await?.map(ServiceTypeDto::from))
    }

    pub async fn find_by_category(&self, category: ServiceCategory) -> Result<Vec<ServiceTypeDto>, ServiceError> {
        let rows = self.repo.find_by_category(category).await?;
        Ok(rows.into_iter().map(ServiceTypeDto::from).collect())
    }

    /// Case-insensitive substring search on the service name.
    pub async fn search_by_name(&self, keyword: &str) -> Result<Vec<ServiceTypeDto>, ServiceError> {
        if keyword.trim().is_empty() {
            return Err(ServiceError::Validation("search keyword must not be blank".into()));
        }
        let rows = self.repo.find_by_service_name_containing(keyword).await?;
        Ok(rows.into_iter().map(ServiceTypeDto::from).collect())
    }
}
