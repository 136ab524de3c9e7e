//! Websocket client with pub/sub dispatch and automatic reconnect.
//!
//! The [`Socket`] owns the connection lifecycle: it opens one websocket to
//! `/ws` (scheme mirroring the page's own), dispatches every inbound
//! envelope to the handlers subscribed to its message type, and reconnects
//! with a flat delay whenever the connection drops. The synthetic events
//! `open`, `close`, and `error` flow through the same dispatch table as
//! server-defined message types.
//!
//! The handler table, dispatch, and disconnected-send paths have no browser
//! dependency and are unit-tested natively; only the connection loop is
//! gated behind the `csr` feature.

#[cfg(test)]
#[path = "socket_test.rs"]
mod socket_test;

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use futures::channel::mpsc::UnboundedSender;
use messages::{Envelope, encode_envelope};
use serde_json::Value;

/// Delay between reconnect attempts.
const RECONNECT_DELAY: Duration = Duration::from_secs(2);

type Handler = Arc<dyn Fn(&Value) + Send + Sync>;
type HandlerMap = HashMap<String, Vec<(usize, Handler)>>;

/// Handle returned by [`Socket::subscribe`], used to remove the handler.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Subscription(usize);

struct SocketInner {
    handlers: Mutex<HandlerMap>,
    next_id: AtomicUsize,
    tx: Mutex<Option<UnboundedSender<String>>>,
    connected: AtomicBool,
    started: AtomicBool,
    reconnect_delay: Duration,
}

/// Owned websocket handle shared through Leptos context.
///
/// Cloning is cheap; all clones share one connection loop.
#[derive(Clone)]
pub struct Socket {
    inner: Arc<SocketInner>,
}

impl Default for Socket {
    fn default() -> Self {
        Self::new()
    }
}

impl Socket {
    /// Create a disconnected socket with the default reconnect delay.
    #[must_use]
    pub fn new() -> Self {
        Self::with_reconnect_delay(RECONNECT_DELAY)
    }

    /// Create a disconnected socket with a custom reconnect delay.
    #[must_use]
    pub fn with_reconnect_delay(reconnect_delay: Duration) -> Self {
        Self {
            inner: Arc::new(SocketInner {
                handlers: Mutex::new(HashMap::new()),
                next_id: AtomicUsize::new(0),
                tx: Mutex::new(None),
                connected: AtomicBool::new(false),
                started: AtomicBool::new(false),
                reconnect_delay,
            }),
        }
    }

    /// Delay between reconnect attempts.
    #[must_use]
    pub fn reconnect_delay(&self) -> Duration {
        self.inner.reconnect_delay
    }

    /// Register a handler for a named event.
    ///
    /// Handlers for one event run synchronously in registration order with
    /// the envelope's payload.
    pub fn subscribe<F>(&self, event: &str, handler: F) -> Subscription
    where
        F: Fn(&Value) + Send + Sync + 'static,
    {
        let id = self.inner.next_id.fetch_add(1, Ordering::SeqCst);
        if let Ok(mut map) = self.inner.handlers.lock() {
            map.entry(event.to_owned())
                .or_default()
                .push((id, Arc::new(handler)));
        }
        Subscription(id)
    }

    /// Remove a previously registered handler.
    pub fn unsubscribe(&self, event: &str, subscription: Subscription) {
        if let Ok(mut map) = self.inner.handlers.lock() {
            if let Some(list) = map.get_mut(event) {
                list.retain(|(id, _)| *id != subscription.0);
            }
        }
    }

    /// Send an envelope to the server.
    ///
    /// Only succeeds while the connection is open; otherwise the message is
    /// dropped and a local `error` event is dispatched, so callers never
    /// need their own failure handling. Returns whether the message was
    /// queued for the wire.
    pub fn send(&self, kind: &str, payload: Value) -> bool {
        if self.inner.connected.load(Ordering::SeqCst) {
            if let Ok(guard) = self.inner.tx.lock() {
                if let Some(tx) = guard.as_ref() {
                    let text = encode_envelope(&Envelope::new(kind, payload));
                    if tx.unbounded_send(text).is_ok() {
                        return true;
                    }
                }
            }
        }

        leptos::logging::warn!("websocket is not connected; dropping {kind}");
        self.dispatch(
            "error",
            &serde_json::json!({"message": "Cannot send message. WebSocket is not connected."}),
        );
        false
    }

    /// Open the websocket and keep it open, reconnecting on close.
    ///
    /// Safe to call more than once; only the first call starts the
    /// connection loop.
    pub fn connect(&self) {
        if self.inner.started.swap(true, Ordering::SeqCst) {
            return;
        }

        #[cfg(feature = "csr")]
        {
            let (tx, rx) = futures::channel::mpsc::unbounded::<String>();
            if let Ok(mut guard) = self.inner.tx.lock() {
                *guard = Some(tx);
            }
            let socket = self.clone();
            leptos::task::spawn_local(socket_loop(socket, rx));
        }
    }

    /// Invoke every handler registered for `event`, in registration order.
    ///
    /// The handler list is copied out before invocation so a handler may
    /// subscribe, unsubscribe, or send (and thereby dispatch) re-entrantly.
    pub(crate) fn dispatch(&self, event: &str, payload: &Value) {
        let handlers: Vec<Handler> = match self.inner.handlers.lock() {
            Ok(map) => map
                .get(event)
                .map(|list| list.iter().map(|(_, h)| Arc::clone(h)).collect())
                .unwrap_or_default(),
            Err(_) => Vec::new(),
        };

        for handler in handlers {
            handler(payload);
        }
    }
}

/// Connection loop: connect, pump, dispatch `close`, wait, repeat forever.
#[cfg(feature = "csr")]
async fn socket_loop(socket: Socket, rx: futures::channel::mpsc::UnboundedReceiver<String>) {
    use std::cell::RefCell;
    use std::rc::Rc;

    let rx = Rc::new(RefCell::new(rx));

    loop {
        let url = socket_url();
        match connect_and_run(&socket, &url, &rx).await {
            Ok(()) => {
                leptos::logging::log!("websocket closed; reconnecting shortly");
            }
            Err(e) => {
                leptos::logging::warn!("websocket connect failed: {e}");
                socket.dispatch(
                    "error",
                    &serde_json::json!({"message": "WebSocket connection error."}),
                );
            }
        }

        socket.inner.connected.store(false, Ordering::SeqCst);
        socket.dispatch("close", &Value::Null);

        gloo_timers::future::sleep(socket.reconnect_delay()).await;
    }
}

/// Websocket URL mirroring the page's own scheme and host.
#[cfg(feature = "csr")]
fn socket_url() -> String {
    let location = web_sys::window()
        .and_then(|w| w.location().href().ok())
        .unwrap_or_default();
    let proto = if location.starts_with("https") { "wss" } else { "ws" };
    let host = web_sys::window()
        .and_then(|w| w.location().host().ok())
        .unwrap_or_else(|| "localhost:8080".to_owned());
    format!("{proto}://{host}/ws")
}

/// Connect and process messages until either direction ends.
#[cfg(feature = "csr")]
async fn connect_and_run(
    socket: &Socket,
    url: &str,
    rx: &std::rc::Rc<std::cell::RefCell<futures::channel::mpsc::UnboundedReceiver<String>>>,
) -> Result<(), String> {
    use futures::StreamExt;
    use gloo_net::websocket::Message;
    use gloo_net::websocket::futures::WebSocket;

    let ws = WebSocket::open(url).map_err(|e| e.to_string())?;
    let (mut ws_write, mut ws_read) = ws.split();

    socket.inner.connected.store(true, Ordering::SeqCst);
    socket.dispatch("open", &Value::Null);

    // Forward outgoing messages from the shared channel to the sink.
    let mut rx_borrow = rx.borrow_mut();
    let send_task = async {
        use futures::SinkExt;
        while let Some(msg) = rx_borrow.next().await {
            if ws_write.send(Message::Text(msg)).await.is_err() {
                break;
            }
        }
    };

    // Receive loop: decode envelopes and dispatch by message type.
    let recv_task = async {
        while let Some(msg) = ws_read.next().await {
            match msg {
                Ok(Message::Text(text)) => match messages::decode_envelope(&text) {
                    Ok(envelope) => socket.dispatch(&envelope.kind, &envelope.payload),
                    Err(e) => leptos::logging::warn!("bad envelope: {e}"),
                },
                Ok(Message::Bytes(_)) => {}
                Err(e) => {
                    leptos::logging::warn!("websocket recv error: {e}");
                    socket.dispatch(
                        "error",
                        &serde_json::json!({"message": "WebSocket connection error."}),
                    );
                    break;
                }
            }
        }
    };

    // Run both tasks; when either finishes, the connection is done.
    futures::future::select(Box::pin(send_task), Box::pin(recv_task)).await;

    Ok(())
}
