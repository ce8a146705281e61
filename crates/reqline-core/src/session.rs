//! The session a console works in, reduced to what commands need.
//!
//! A session is an ordered history of requests. Requests are immutable and
//! shared behind [`Rc`]; every transform returns the *same* `Rc` when it
//! changes nothing, which is how commands avoid recording a request twice.
//! Whether two requests are "the same" is a question of identity
//! ([`Rc::ptr_eq`]), never of value.

use std::cell::RefCell;
use std::rc::Rc;

use url::Url;

use crate::{Error, Result};

/// Shared handle to a session. Commands hold one of these, never the session
/// itself.
pub type SessionRef = Rc<RefCell<Session>>;

/// A request under construction: an address plus the cookies to send.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Request {
    url: Url,
    cookies: Vec<(String, String)>,
}

impl Request {
    /// Create a request for `address`. An address without a scheme is taken
    /// to be `http`.
    ///
    /// ```rust
    /// use reqline_core::Request;
    ///
    /// let request = Request::new("example.com/users").unwrap();
    /// assert_eq!(request.address(), "http://example.com/users");
    /// ```
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidUrl`] when the address cannot be parsed.
    pub fn new(address: &str) -> Result<Self> {
        let address = address.trim();
        let url = if address.contains("://") {
            Url::parse(address)?
        } else {
            Url::parse(&format!("http://{address}"))?
        };
        Ok(Self {
            url,
            cookies: Vec::new(),
        })
    }

    /// The full address.
    pub fn address(&self) -> &str {
        self.url.as_str()
    }

    /// The host, if the address has one.
    pub fn host(&self) -> Option<&str> {
        self.url.host_str()
    }

    /// The (percent-encoded) path.
    pub fn path(&self) -> &str {
        self.url.path()
    }

    /// The fragment, if any.
    pub fn fragment(&self) -> Option<&str> {
        self.url.fragment()
    }

    /// Cookies in the order they were added.
    pub fn cookies(&self) -> &[(String, String)] {
        &self.cookies
    }

    /// Whether any cookies are set.
    pub fn has_cookies(&self) -> bool {
        !self.cookies.is_empty()
    }

    /// A copy with one more cookie.
    pub fn with_cookie(&self, name: &str, value: &str) -> Self {
        let mut next = self.clone();
        next.cookies.push((name.to_string(), value.to_string()));
        next
    }

    /// Change the path. Absolute paths replace the current one, relative
    /// paths resolve against it the way a browser resolves links.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidUrl`] when the path cannot be resolved.
    pub fn with_path(self: &Rc<Self>, path: &str) -> Result<Rc<Self>> {
        let resolved = if path.starts_with('/') {
            path.to_string()
        } else {
            self.url.join(&format!("./{path}"))?.path().to_string()
        };
        let mut url = self.url.clone();
        url.set_path(&resolved);
        Ok(self.replace_url(url))
    }

    /// Set the fragment.
    pub fn with_fragment(self: &Rc<Self>, fragment: &str) -> Rc<Self> {
        let mut url = self.url.clone();
        url.set_fragment(Some(fragment.strip_prefix('#').unwrap_or(fragment)));
        self.replace_url(url)
    }

    /// Remove the fragment.
    pub fn without_fragment(self: &Rc<Self>) -> Rc<Self> {
        let mut url = self.url.clone();
        url.set_fragment(None);
        self.replace_url(url)
    }

    /// Change the port. The scheme's default port is not written out.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidUrl`] for addresses that cannot carry a port.
    pub fn with_port(self: &Rc<Self>, port: u16) -> Result<Rc<Self>> {
        let mut url = self.url.clone();
        url.set_port(Some(port))
            .map_err(|()| Error::InvalidUrl(format!("'{}' cannot have a port", self.url)))?;
        Ok(self.replace_url(url))
    }

    /// The port, explicit or implied by the scheme.
    pub fn port(&self) -> Option<u16> {
        self.url.port_or_known_default()
    }

    /// Change the host. Cookies belong to a host, so they are dropped when
    /// the host actually changes.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidUrl`] for hosts the address cannot carry.
    pub fn with_host(self: &Rc<Self>, host: &str) -> Result<Rc<Self>> {
        let mut url = self.url.clone();
        url.set_host(Some(host))?;
        if url == self.url {
            return Ok(Rc::clone(self));
        }
        Ok(Rc::new(Self {
            url,
            cookies: Vec::new(),
        }))
    }

    fn replace_url(self: &Rc<Self>, url: Url) -> Rc<Self> {
        if url == self.url {
            Rc::clone(self)
        } else {
            Rc::new(Self {
                url,
                cookies: self.cookies.clone(),
            })
        }
    }
}

/// Request history of one console session.
#[derive(Debug, Default)]
pub struct Session {
    requests: Vec<Rc<Request>>,
}

impl Session {
    /// A session whose history starts with `request`.
    pub fn new(request: Request) -> Self {
        Self {
            requests: vec![Rc::new(request)],
        }
    }

    /// Open a shared session at `address`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidUrl`] when the address cannot be parsed.
    pub fn open(address: &str) -> Result<SessionRef> {
        Ok(Self::new(Request::new(address)?).into_ref())
    }

    /// Wrap the session in a shared handle.
    pub fn into_ref(self) -> SessionRef {
        Rc::new(RefCell::new(self))
    }

    /// All requests, oldest first.
    pub fn requests(&self) -> &[Rc<Request>] {
        &self.requests
    }

    /// The most recent request.
    pub fn last_request(&self) -> Option<&Rc<Request>> {
        self.requests.last()
    }

    /// The most recent request, or an error naming `command` when the
    /// history is empty.
    pub(crate) fn require_last(&self, command: &str) -> Result<Rc<Request>> {
        self.last_request()
            .cloned()
            .ok_or_else(|| Error::MissingArgument {
                command: command.to_string(),
                argument: "a request".to_string(),
            })
    }

    /// Append `request` unless it is the very object already at the end of
    /// the history. Returns whether it was appended.
    pub fn push_if_distinct(&mut self, request: Rc<Request>) -> bool {
        if self
            .requests
            .last()
            .is_some_and(|last| Rc::ptr_eq(last, &request))
        {
            return false;
        }
        self.requests.push(request);
        true
    }
}
