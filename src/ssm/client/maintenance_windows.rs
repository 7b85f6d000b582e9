use super::SsmClient;
use crate::error::Error;
use crate::models::{
    DeregisterTaskFromMaintenanceWindowRequest, DeregisterTaskFromMaintenanceWindowResult,
    GetMaintenanceWindowTaskRequest, GetMaintenanceWindowTaskResult,
    RegisterTaskWithMaintenanceWindowRequest, RegisterTaskWithMaintenanceWindowResult,
    UpdateMaintenanceWindowTaskRequest, UpdateMaintenanceWindowTaskResult,
};

impl SsmClient {
    /// Adds a task to a maintenance window.
    pub fn register_task_with_maintenance_window(
        &self,
        request: &RegisterTaskWithMaintenanceWindowRequest,
    ) -> Result<RegisterTaskWithMaintenanceWindowResult, Error> {
        self.call("RegisterTaskWithMaintenanceWindow", request)
    }

    /// Retrieves a registered task.
    pub fn get_maintenance_window_task(
        &self,
        request: &GetMaintenanceWindowTaskRequest,
    ) -> Result<GetMaintenanceWindowTaskResult, Error> {
        self.call("GetMaintenanceWindowTask", request)
    }

    /// Updates a registered task. With the request's replace flag set,
    /// omitted fields reset to their defaults instead of being kept.
    pub fn update_maintenance_window_task(
        &self,
        request: &UpdateMaintenanceWindowTaskRequest,
    ) -> Result<UpdateMaintenanceWindowTaskResult, Error> {
        self.call("UpdateMaintenanceWindowTask", request)
    }

    /// Removes a task from a maintenance window.
    pub fn deregister_task_from_maintenance_window(
        &self,
        request: &DeregisterTaskFromMaintenanceWindowRequest,
    ) -> Result<DeregisterTaskFromMaintenanceWindowResult, Error> {
        self.call("DeregisterTaskFromMaintenanceWindow", request)
    }
}
