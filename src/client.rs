//! Client handle tying configuration, auth state, and a transport together.
//!
//! [`Client`] owns everything a call needs: the [`ClientConfig`] identity and base URLs, the
//! shared [`AuthContext`], an [`HttpTransport`], and the [`TransportErrorMapper`] that
//! normalizes its failures. Verb-specific dispatch lives in [`dispatch`]; the OAuth handshake is
//! implemented in [`crate::flows`].

pub mod dispatch;

// self
use crate::{
	_prelude::*,
	auth::{AuthContext, Credentials, FlowStage},
	config::ClientConfig,
	http::{HttpTransport, TransportErrorMapper},
};
#[cfg(feature = "reqwest")]
use crate::http::{ReqwestHttpClient, ReqwestTransportErrorMapper};

#[cfg(feature = "reqwest")]
/// Client specialized for the crate's default reqwest transport stack.
pub type DiscogsClient = Client<ReqwestHttpClient, ReqwestTransportErrorMapper>;

/// Async Discogs API client.
///
/// Cloning is cheap and clones share the same auth state and flow guard, so a handshake
/// completed through one clone authenticates all of them.
pub struct Client<C, M>
where
	C: ?Sized + HttpTransport,
	M: ?Sized + TransportErrorMapper<C::TransportError>,
{
	/// HTTP transport used for every outbound request.
	pub http_client: Arc<C>,
	/// Mapper applied to transport-layer errors before surfacing them to callers.
	pub transport_mapper: Arc<M>,
	config: ClientConfig,
	auth: Arc<AuthContext>,
	flow_guard: Arc<AsyncMutex<()>>,
}
impl<C, M> Client<C, M>
where
	C: ?Sized + HttpTransport,
	M: ?Sized + TransportErrorMapper<C::TransportError>,
{
	/// Creates a client that reuses the caller-provided transport + mapper pair.
	pub fn with_http_client(
		config: ClientConfig,
		credentials: Credentials,
		http_client: impl Into<Arc<C>>,
		mapper: impl Into<Arc<M>>,
	) -> Self {
		Self {
			http_client: http_client.into(),
			transport_mapper: mapper.into(),
			config,
			auth: Arc::new(AuthContext::new(credentials)),
			flow_guard: Default::default(),
		}
	}

	/// Configuration the client was built with.
	pub fn config(&self) -> &ClientConfig {
		&self.config
	}

	/// Shared auth state.
	pub fn auth(&self) -> &AuthContext {
		&self.auth
	}

	/// Current OAuth handshake stage.
	pub fn stage(&self) -> FlowStage {
		self.auth.stage()
	}

	pub(crate) fn flow_guard(&self) -> &AsyncMutex<()> {
		&self.flow_guard
	}
}
#[cfg(feature = "reqwest")]
impl Client<ReqwestHttpClient, ReqwestTransportErrorMapper> {
	/// Creates a client backed by its own reqwest transport.
	///
	/// The configured timeout, if any, is applied to the transport. Fails with
	/// [`Error::Config`] when the reqwest client cannot be constructed.
	pub fn new(config: ClientConfig, credentials: Credentials) -> Result<Self> {
		let http_client = ReqwestHttpClient::from_config(ReqwestClient::builder(), &config)?;

		Ok(Self::with_http_client(
			config,
			credentials,
			http_client,
			Arc::new(ReqwestTransportErrorMapper),
		))
	}
}
impl<C, M> Clone for Client<C, M>
where
	C: ?Sized + HttpTransport,
	M: ?Sized + TransportErrorMapper<C::TransportError>,
{
	fn clone(&self) -> Self {
		Self {
			http_client: self.http_client.clone(),
			transport_mapper: self.transport_mapper.clone(),
			config: self.config.clone(),
			auth: self.auth.clone(),
			flow_guard: self.flow_guard.clone(),
		}
	}
}
impl<C, M> Debug for Client<C, M>
where
	C: ?Sized + HttpTransport,
	M: ?Sized + TransportErrorMapper<C::TransportError>,
{
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_struct("Client")
			.field("user_agent", &self.config.user_agent())
			.field("api_base", &self.config.api_base.as_str())
			.field("stage", &self.auth.stage())
			.finish()
	}
}
