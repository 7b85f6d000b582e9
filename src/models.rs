mod activation;
mod association;
mod automation;
mod command;
mod common;
mod document;
mod maintenance_window;
mod ops_item;
mod parameter;
mod patch;
mod service_setting;
mod tagging;

pub use activation::{
    Activation, CreateActivationRequest, CreateActivationResult, DeleteActivationRequest,
    DeleteActivationResult, DescribeActivationsFilter, DescribeActivationsRequest,
    DescribeActivationsResult,
};
pub use association::{
    AssociationComplianceSeverity, AssociationDescription, AssociationOverview, AssociationStatus,
    AssociationSyncCompliance, CreateAssociationBatchRequest, CreateAssociationBatchRequestEntry,
    CreateAssociationBatchResult, CreateAssociationRequest, CreateAssociationResult,
    DeleteAssociationRequest, DeleteAssociationResult, DescribeAssociationRequest,
    DescribeAssociationResult, FailedCreateAssociation, UpdateAssociationRequest,
    UpdateAssociationResult,
};
pub use automation::{
    AutomationExecutionFilter, AutomationExecutionMetadata, AutomationExecutionStatus,
    DescribeAutomationExecutionsRequest, DescribeAutomationExecutionsResult, ExecutionMode,
};
pub use command::{
    CancelCommandRequest, CancelCommandResult, Command, CommandFilter, CommandInvocation,
    CommandPlugin, CommandStatus, GetCommandInvocationRequest, GetCommandInvocationResult,
    ListCommandInvocationsRequest, ListCommandInvocationsResult, ListCommandsRequest,
    ListCommandsResult, SendCommandRequest, SendCommandResult,
};
pub use common::{
    CloudWatchOutputConfig, InstanceAssociationOutputLocation, LoggingInfo, NotificationConfig,
    ResolvedTargets, S3OutputLocation, Tag, Target,
};
pub use document::{
    AttachmentContent, AttachmentInformation, AttachmentsSource, CreateDocumentRequest,
    CreateDocumentResult, DeleteDocumentRequest, DeleteDocumentResult, DescribeDocumentRequest,
    DescribeDocumentResult, DocumentDescription, DocumentFormat, DocumentHashType,
    DocumentParameter, DocumentRequires, DocumentStatus, DocumentType, GetDocumentRequest,
    GetDocumentResult,
};
pub use maintenance_window::{
    DeregisterTaskFromMaintenanceWindowRequest, DeregisterTaskFromMaintenanceWindowResult,
    GetMaintenanceWindowTaskRequest, GetMaintenanceWindowTaskResult,
    MaintenanceWindowAutomationParameters, MaintenanceWindowLambdaParameters,
    MaintenanceWindowRunCommandParameters, MaintenanceWindowStepFunctionsParameters,
    MaintenanceWindowTask, MaintenanceWindowTaskInvocationParameters,
    MaintenanceWindowTaskParameterValueExpression, MaintenanceWindowTaskType,
    RegisterTaskWithMaintenanceWindowRequest, RegisterTaskWithMaintenanceWindowResult,
    UpdateMaintenanceWindowTaskRequest, UpdateMaintenanceWindowTaskResult,
};
pub use ops_item::{
    CreateOpsItemRequest, CreateOpsItemResult, GetOpsItemRequest, GetOpsItemResult, OpsItem,
    OpsItemDataType, OpsItemDataValue, OpsItemNotification, OpsItemStatus, RelatedOpsItem,
    UpdateOpsItemRequest, UpdateOpsItemResult,
};
pub use parameter::{
    DeleteParameterRequest, DeleteParameterResult, GetParameterRequest, GetParameterResult,
    GetParametersByPathRequest, GetParametersByPathResult, GetParametersRequest,
    GetParametersResult, LabelParameterVersionRequest, LabelParameterVersionResult, Parameter,
    ParameterStringFilter, ParameterTier, ParameterType, PutParameterRequest, PutParameterResult,
};
pub use patch::{
    CreatePatchBaselineRequest, CreatePatchBaselineResult, DeletePatchBaselineRequest,
    DeletePatchBaselineResult, GetPatchBaselineRequest, GetPatchBaselineResult, OperatingSystem,
    PatchAction, PatchComplianceLevel, PatchFilter, PatchFilterGroup, PatchRule, PatchRuleGroup,
    PatchSource, UpdatePatchBaselineRequest, UpdatePatchBaselineResult,
};
pub use service_setting::{
    GetServiceSettingRequest, GetServiceSettingResult, ResetServiceSettingRequest,
    ResetServiceSettingResult, ServiceSetting, UpdateServiceSettingRequest,
    UpdateServiceSettingResult,
};
pub use tagging::{
    AddTagsToResourceRequest, AddTagsToResourceResult, ListTagsForResourceRequest,
    ListTagsForResourceResult, RemoveTagsFromResourceRequest, RemoveTagsFromResourceResult,
    ResourceTypeForTagging,
};
