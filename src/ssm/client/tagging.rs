use super::SsmClient;
use crate::error::Error;
use crate::models::{
    AddTagsToResourceRequest, AddTagsToResourceResult, ListTagsForResourceRequest,
    ListTagsForResourceResult, RemoveTagsFromResourceRequest, RemoveTagsFromResourceResult,
};

impl SsmClient {
    /// Tags a resource. An existing key gets its value replaced.
    pub fn add_tags_to_resource(
        &self,
        request: &AddTagsToResourceRequest,
    ) -> Result<AddTagsToResourceResult, Error> {
        self.call("AddTagsToResource", request)
    }

    /// Removes tags from a resource by key.
    pub fn remove_tags_from_resource(
        &self,
        request: &RemoveTagsFromResourceRequest,
    ) -> Result<RemoveTagsFromResourceResult, Error> {
        self.call("RemoveTagsFromResource", request)
    }

    /// Lists a resource's tags.
    pub fn list_tags_for_resource(
        &self,
        request: &ListTagsForResourceRequest,
    ) -> Result<ListTagsForResourceResult, Error> {
        self.call("ListTagsForResource", request)
    }
}
