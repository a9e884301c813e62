//! Request security context and the policy seam every entry point goes through.

use std::sync::Arc;

use uuid::Uuid;

/// Resource name changeset reads are authorized against.
pub const CHANGESETS_RESOURCE: &str = "changesets";

/// Action name for reads.
pub const READ_ACTION: &str = "read";

/// Identity of the caller for a single request.
///
/// Passed unmodified from the entry point to every collaborator call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SecurityContext {
    tenant_id: Uuid,
    subject_id: Uuid,
    subject_type: Option<String>,
}

impl SecurityContext {
    #[must_use]
    pub fn builder() -> SecurityContextBuilder {
        SecurityContextBuilder::default()
    }

    /// Context with no tenant and no subject.
    #[must_use]
    pub fn anonymous() -> Self {
        SecurityContextBuilder::default().build()
    }

    /// Context for system-internal callers.
    #[must_use]
    pub fn root() -> Self {
        SecurityContextBuilder::default()
            .subject_type("system")
            .build()
    }

    #[must_use]
    pub fn tenant_id(&self) -> Uuid {
        self.tenant_id
    }

    #[must_use]
    pub fn subject_id(&self) -> Uuid {
        self.subject_id
    }

    #[must_use]
    pub fn subject_type(&self) -> Option<&str> {
        self.subject_type.as_deref()
    }
}

#[derive(Default)]
pub struct SecurityContextBuilder {
    tenant_id: Option<Uuid>,
    subject_id: Option<Uuid>,
    subject_type: Option<String>,
}

impl SecurityContextBuilder {
    #[must_use]
    pub fn tenant_id(mut self, tenant_id: Uuid) -> Self {
        self.tenant_id = Some(tenant_id);
        self
    }

    #[must_use]
    pub fn subject_id(mut self, subject_id: Uuid) -> Self {
        self.subject_id = Some(subject_id);
        self
    }

    #[must_use]
    pub fn subject_type(mut self, subject_type: &str) -> Self {
        self.subject_type = Some(subject_type.to_owned());
        self
    }

    #[must_use]
    pub fn build(self) -> SecurityContext {
        SecurityContext {
            tenant_id: self.tenant_id.unwrap_or_default(),
            subject_id: self.subject_id.unwrap_or_default(),
            subject_type: self.subject_type,
        }
    }
}

/// Type alias for a reference-counted policy engine.
pub type PolicyEngineRef = Arc<dyn PolicyEngine>;

/// Decides whether a caller may perform an action on a resource.
pub trait PolicyEngine: Send + Sync {
    fn allows(&self, ctx: &SecurityContext, resource: &str, action: &str) -> bool;
}

/// Allows everything.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopPolicyEngine;

impl PolicyEngine for NoopPolicyEngine {
    fn allows(&self, _ctx: &SecurityContext, _resource: &str, _action: &str) -> bool {
        true
    }
}

/// Denies everything.
#[derive(Debug, Default, Clone, Copy)]
pub struct DenyAllPolicyEngine;

impl PolicyEngine for DenyAllPolicyEngine {
    fn allows(&self, _ctx: &SecurityContext, _resource: &str, _action: &str) -> bool {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_fills_missing_ids_with_nil() {
        let subject = Uuid::new_v4();
        let ctx = SecurityContext::builder().subject_id(subject).build();
        assert_eq!(ctx.subject_id(), subject);
        assert_eq!(ctx.tenant_id(), Uuid::nil());
        assert_eq!(ctx.subject_type(), None);
    }

    #[test]
    fn builtin_policies() {
        let ctx = SecurityContext::root();
        assert_eq!(ctx.subject_type(), Some("system"));
        assert!(NoopPolicyEngine.allows(&ctx, CHANGESETS_RESOURCE, READ_ACTION));
        assert!(!DenyAllPolicyEngine.allows(&ctx, CHANGESETS_RESOURCE, READ_ACTION));
    }
}
