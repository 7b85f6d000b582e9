#![forbid(unsafe_code)]

mod client_defaults;
mod error;
mod models;
mod ssm;

pub use error::{Error, ServiceError, UnknownEnumValue};

pub use models::{
    Activation, AddTagsToResourceRequest, AddTagsToResourceResult, AssociationComplianceSeverity,
    AssociationDescription, AssociationOverview, AssociationStatus, AssociationSyncCompliance,
    AttachmentContent, AttachmentInformation, AttachmentsSource, AutomationExecutionFilter,
    AutomationExecutionMetadata, AutomationExecutionStatus, CancelCommandRequest,
    CancelCommandResult, CloudWatchOutputConfig, Command, CommandFilter, CommandInvocation,
    CommandPlugin, CommandStatus, CreateActivationRequest, CreateActivationResult,
    CreateAssociationBatchRequest, CreateAssociationBatchRequestEntry,
    CreateAssociationBatchResult, CreateAssociationRequest, CreateAssociationResult,
    CreateDocumentRequest, CreateDocumentResult, CreateOpsItemRequest, CreateOpsItemResult,
    CreatePatchBaselineRequest, CreatePatchBaselineResult, DeleteActivationRequest,
    DeleteActivationResult, DeleteAssociationRequest, DeleteAssociationResult,
    DeleteDocumentRequest, DeleteDocumentResult, DeleteParameterRequest, DeleteParameterResult,
    DeletePatchBaselineRequest, DeletePatchBaselineResult,
    DeregisterTaskFromMaintenanceWindowRequest, DeregisterTaskFromMaintenanceWindowResult,
    DescribeActivationsFilter, DescribeActivationsRequest, DescribeActivationsResult,
    DescribeAssociationRequest, DescribeAssociationResult, DescribeAutomationExecutionsRequest,
    DescribeAutomationExecutionsResult, DescribeDocumentRequest, DescribeDocumentResult,
    DocumentDescription, DocumentFormat, DocumentHashType, DocumentParameter, DocumentRequires,
    DocumentStatus, DocumentType, ExecutionMode, FailedCreateAssociation,
    GetCommandInvocationRequest, GetCommandInvocationResult, GetDocumentRequest, GetDocumentResult,
    GetMaintenanceWindowTaskRequest, GetMaintenanceWindowTaskResult, GetOpsItemRequest,
    GetOpsItemResult, GetParameterRequest, GetParameterResult, GetParametersByPathRequest,
    GetParametersByPathResult, GetParametersRequest, GetParametersResult, GetPatchBaselineRequest,
    GetPatchBaselineResult, GetServiceSettingRequest, GetServiceSettingResult,
    InstanceAssociationOutputLocation, LabelParameterVersionRequest, LabelParameterVersionResult,
    ListCommandInvocationsRequest, ListCommandInvocationsResult, ListCommandsRequest,
    ListCommandsResult, ListTagsForResourceRequest, ListTagsForResourceResult, LoggingInfo,
    MaintenanceWindowAutomationParameters, MaintenanceWindowLambdaParameters,
    MaintenanceWindowRunCommandParameters, MaintenanceWindowStepFunctionsParameters,
    MaintenanceWindowTask, MaintenanceWindowTaskInvocationParameters,
    MaintenanceWindowTaskParameterValueExpression, MaintenanceWindowTaskType, NotificationConfig,
    OperatingSystem, OpsItem, OpsItemDataType, OpsItemDataValue, OpsItemNotification,
    OpsItemStatus, Parameter, ParameterStringFilter, ParameterTier, ParameterType, PatchAction,
    PatchComplianceLevel, PatchFilter, PatchFilterGroup, PatchRule, PatchRuleGroup, PatchSource,
    PutParameterRequest, PutParameterResult, RegisterTaskWithMaintenanceWindowRequest,
    RegisterTaskWithMaintenanceWindowResult, RelatedOpsItem, RemoveTagsFromResourceRequest,
    RemoveTagsFromResourceResult, ResetServiceSettingRequest, ResetServiceSettingResult,
    ResolvedTargets, ResourceTypeForTagging, S3OutputLocation, SendCommandRequest,
    SendCommandResult, ServiceSetting, Tag, Target, UpdateAssociationRequest,
    UpdateAssociationResult, UpdateMaintenanceWindowTaskRequest, UpdateMaintenanceWindowTaskResult,
    UpdateOpsItemRequest, UpdateOpsItemResult, UpdatePatchBaselineRequest,
    UpdatePatchBaselineResult, UpdateServiceSettingRequest, UpdateServiceSettingResult,
};

pub use ssm::{SsmClient, SsmClientBuilder};
