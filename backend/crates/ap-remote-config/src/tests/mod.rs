mod retry_policy;
mod template_merge;
