use super::SsmClient;
use crate::error::Error;
use crate::models::{DescribeAutomationExecutionsRequest, DescribeAutomationExecutionsResult};

impl SsmClient {
    /// Lists automation executions, optionally filtered.
    pub fn describe_automation_executions(
        &self,
        request: &DescribeAutomationExecutionsRequest,
    ) -> Result<DescribeAutomationExecutionsResult, Error> {
        self.call("DescribeAutomationExecutions", request)
    }
}
