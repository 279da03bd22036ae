//! Shared auth state owned by one client.
//!
//! [`AuthContext`] holds the starting [`Credentials`] plus whatever the OAuth handshake has
//! produced so far. Reads take a snapshot under a `parking_lot` read lock so no guard is ever
//! held across an `.await`; the OAuth flow additionally serializes its writes behind the
//! client's async flow guard.

// self
use crate::{
	_prelude::*,
	auth::{AccessToken, Credentials, RequestToken, Secret},
};

/// Observable stage of the three-legged handshake.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FlowStage {
	/// No handshake has started, or it was reset.
	Unauthenticated,
	/// A request token and its secret are stored.
	RequestTokenIssued,
	/// The user approved the request token and the redirect was accepted.
	UserAuthorized,
	/// An access token pair is available.
	Authenticated,
}
impl FlowStage {
	/// Returns a stable label suitable for logs and errors.
	pub const fn as_str(self) -> &'static str {
		match self {
			FlowStage::Unauthenticated => "unauthenticated",
			FlowStage::RequestTokenIssued => "request_token_issued",
			FlowStage::UserAuthorized => "user_authorized",
			FlowStage::Authenticated => "authenticated",
		}
	}
}
impl Display for FlowStage {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}

/// Credential set resolved for one outgoing call.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AuthMode {
	/// `Authorization: Discogs token=...`
	PersonalToken {
		/// Personal access token.
		token: Secret,
	},
	/// OAuth header signed with the consumer pair and, once authenticated, the access token.
	OAuth {
		/// Consumer key.
		consumer_key: String,
		/// Consumer secret.
		consumer_secret: Secret,
		/// Access token pair, present after a completed handshake.
		access: Option<AccessToken>,
	},
}

#[derive(Clone, Debug)]
enum FlowState {
	Unauthenticated,
	RequestTokenIssued { request_token: RequestToken },
	UserAuthorized { request_token: RequestToken },
	Authenticated,
}
impl FlowState {
	fn stage(&self) -> FlowStage {
		match self {
			FlowState::Unauthenticated => FlowStage::Unauthenticated,
			FlowState::RequestTokenIssued { .. } => FlowStage::RequestTokenIssued,
			FlowState::UserAuthorized { .. } => FlowStage::UserAuthorized,
			FlowState::Authenticated => FlowStage::Authenticated,
		}
	}

	fn request_token(&self) -> Option<&RequestToken> {
		match self {
			FlowState::RequestTokenIssued { request_token }
			| FlowState::UserAuthorized { request_token } => Some(request_token),
			_ => None,
		}
	}
}

#[derive(Debug)]
struct AuthState {
	credentials: Credentials,
	flow: FlowState,
}

/// Credentials plus OAuth handshake state, shared by every call a client issues.
#[derive(Debug)]
pub struct AuthContext(RwLock<AuthState>);
impl AuthContext {
	/// Creates a context; a supplied access token pair starts the flow as authenticated.
	pub fn new(credentials: Credentials) -> Self {
		let flow = if credentials.has_access_token() {
			FlowState::Authenticated
		} else {
			FlowState::Unauthenticated
		};

		Self(RwLock::new(AuthState { credentials, flow }))
	}

	/// Resolves the credential set the next call will be signed with.
	///
	/// A personal token wins over consumer credentials. Fails with [`Error::BadAuth`] when
	/// neither is configured.
	pub fn mode(&self) -> Result<AuthMode> {
		let state = self.0.read();
		let credentials = &state.credentials;

		if let Some(token) = &credentials.personal_token {
			return Ok(AuthMode::PersonalToken { token: token.clone() });
		}

		let (consumer_key, consumer_secret) = consumer_pair(credentials)?;
		let access = match (&credentials.oauth_token, &credentials.oauth_token_secret) {
			(Some(token), Some(secret)) =>
				Some(AccessToken { token: token.clone(), secret: secret.clone() }),
			_ => None,
		};

		Ok(AuthMode::OAuth { consumer_key, consumer_secret, access })
	}

	/// Consumer key and secret, required by every OAuth handshake step.
	pub fn consumer(&self) -> Result<(String, Secret)> {
		consumer_pair(&self.0.read().credentials)
	}

	/// Current handshake stage.
	pub fn stage(&self) -> FlowStage {
		self.0.read().flow.stage()
	}

	/// Snapshot of the current credentials.
	pub fn credentials(&self) -> Credentials {
		self.0.read().credentials.clone()
	}

	/// Request token issued by the most recent request-token step, if the flow still holds it.
	pub fn request_token(&self) -> Option<RequestToken> {
		self.0.read().flow.request_token().cloned()
	}

	/// Installs or replaces the personal access token.
	pub fn set_personal_token(&self, token: impl Into<Secret>) {
		self.0.write().credentials.personal_token = Some(token.into());
	}

	/// Stores an access token pair and marks the flow as authenticated.
	pub fn set_access_token(&self, access: &AccessToken) {
		let mut state = self.0.write();

		state.credentials.oauth_token = Some(access.token.clone());
		state.credentials.oauth_token_secret = Some(access.secret.clone());
		state.flow = FlowState::Authenticated;
	}

	/// Drops the access token pair and any in-progress handshake.
	pub fn clear_access_token(&self) {
		let mut state = self.0.write();

		state.credentials.oauth_token = None;
		state.credentials.oauth_token_secret = None;
		state.flow = FlowState::Unauthenticated;
	}

	/// Returns the handshake to [`FlowStage::Unauthenticated`] without touching credentials.
	pub fn reset_flow(&self) {
		self.0.write().flow = FlowState::Unauthenticated;
	}

	pub(crate) fn store_request_token(&self, request_token: RequestToken) {
		self.0.write().flow = FlowState::RequestTokenIssued { request_token };
	}

	/// Moves the stored request token into [`FlowStage::UserAuthorized`].
	///
	/// The verifier travels with the caller's [`VerifierGrant`](crate::auth::VerifierGrant)
	/// instead of being kept here. Fails with [`Error::MissingStep`] when no request token is
	/// stored.
	pub(crate) fn mark_user_authorized(&self) -> Result<RequestToken> {
		let mut state = self.0.write();
		let request_token = state.flow.request_token().cloned().ok_or(Error::MissingStep {
			step: "complete_authorization",
			required: FlowStage::RequestTokenIssued,
		})?;

		state.flow = FlowState::UserAuthorized { request_token: request_token.clone() };

		Ok(request_token)
	}

	/// Secret of the stored request token, needed to sign the access-token exchange.
	pub(crate) fn request_token_secret(&self, step: &'static str) -> Result<Secret> {
		self.0
			.read()
			.flow
			.request_token()
			.map(|token| token.secret.clone())
			.ok_or(Error::MissingStep { step, required: FlowStage::RequestTokenIssued })
	}

	pub(crate) fn mark_authenticated(&self) {
		self.0.write().flow = FlowState::Authenticated;
	}
}
impl Default for AuthContext {
	fn default() -> Self {
		Self::new(Credentials::default())
	}
}

fn consumer_pair(credentials: &Credentials) -> Result<(String, Secret)> {
	match (&credentials.consumer_key, &credentials.consumer_secret) {
		(Some(key), Some(secret)) => Ok((key.clone(), secret.clone())),
		(None, _) => Err(Error::BadAuth {
			reason: "neither a personal token nor a consumer key is configured".into(),
		}),
		(Some(_), None) =>
			Err(Error::BadAuth { reason: "the consumer key has no consumer secret".into() }),
	}
}
