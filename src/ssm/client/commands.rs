use super::SsmClient;
use crate::error::Error;
use crate::models::{
    CancelCommandRequest, CancelCommandResult, GetCommandInvocationRequest,
    GetCommandInvocationResult, ListCommandInvocationsRequest, ListCommandInvocationsResult,
    ListCommandsRequest, ListCommandsResult, SendCommandRequest, SendCommandResult,
};

impl SsmClient {
    /// Runs a command document on a set of instances.
    pub fn send_command(&self, request: &SendCommandRequest) -> Result<SendCommandResult, Error> {
        self.call("SendCommand", request)
    }

    /// Retrieves one plugin's output for a command on one instance.
    pub fn get_command_invocation(
        &self,
        request: &GetCommandInvocationRequest,
    ) -> Result<GetCommandInvocationResult, Error> {
        self.call("GetCommandInvocation", request)
    }

    /// Lists commands, newest first.
    pub fn list_commands(&self, request: &ListCommandsRequest) -> Result<ListCommandsResult, Error> {
        self.call("ListCommands", request)
    }

    /// Lists per-instance invocations of one or all commands.
    pub fn list_command_invocations(
        &self,
        request: &ListCommandInvocationsRequest,
    ) -> Result<ListCommandInvocationsResult, Error> {
        self.call("ListCommandInvocations", request)
    }

    /// Attempts to stop a command that is still running.
    pub fn cancel_command(
        &self,
        request: &CancelCommandRequest,
    ) -> Result<CancelCommandResult, Error> {
        self.call("CancelCommand", request)
    }
}
