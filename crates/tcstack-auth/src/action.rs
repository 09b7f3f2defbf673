//! Action descriptors identifying one remote Tencent Cloud operation.

/// Identifies which remote operation an API call invokes.
///
/// The descriptor determines request routing (`endpoint`), the credential
/// scope (`service`), and the action headers; `region` participates only in
/// the `X-TC-Region` header, never in the signature.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Action {
    endpoint: String,
    service: String,
    name: String,
    version: String,
    region: Option<String>,
}

impl Action {
    /// Create a descriptor for an action without a region.
    ///
    /// # Examples
    ///
    /// ```
    /// use tcstack_auth::Action;
    ///
    /// let action = Action::new("tmt.tencentcloudapi.com", "tmt", "TextTranslate", "2018-03-21");
    /// assert_eq!(action.service(), "tmt");
    /// assert!(action.region().is_none());
    /// ```
    #[must_use]
    pub fn new(
        endpoint: impl Into<String>,
        service: impl Into<String>,
        name: impl Into<String>,
        version: impl Into<String>,
    ) -> Self {
        Self {
            endpoint: endpoint.into(),
            service: service.into(),
            name: name.into(),
            version: version.into(),
            region: None,
        }
    }

    /// Attach a region to the descriptor.
    #[must_use]
    pub fn with_region(mut self, region: impl Into<String>) -> Self {
        self.region = Some(region.into());
        self
    }

    /// The API host, e.g. `asr.tencentcloudapi.com`.
    #[must_use]
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// The service namespace embedded in the credential scope.
    #[must_use]
    pub fn service(&self) -> &str {
        &self.service
    }

    /// The action name in its original case, as sent in `X-TC-Action`.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The API version string, as sent in `X-TC-Version`.
    #[must_use]
    pub fn version(&self) -> &str {
        &self.version
    }

    /// The optional region, as sent in `X-TC-Region`.
    #[must_use]
    pub fn region(&self) -> Option<&str> {
        self.region.as_deref()
    }
}
