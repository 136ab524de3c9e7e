use super::*;

use std::sync::Mutex as StdMutex;

#[test]
fn dispatch_invokes_handlers_in_registration_order() {
    let socket = Socket::new();
    let seen = Arc::new(StdMutex::new(Vec::new()));

    for tag in ["first", "second", "third"] {
        let seen = Arc::clone(&seen);
        socket.subscribe("status", move |_| seen.lock().expect("lock").push(tag));
    }

    socket.dispatch("status", &Value::Null);
    assert_eq!(*seen.lock().expect("lock"), vec!["first", "second", "third"]);
}

#[test]
fn dispatch_ignores_unknown_event_types() {
    let socket = Socket::new();
    let seen = Arc::new(StdMutex::new(0_u32));

    {
        let seen = Arc::clone(&seen);
        socket.subscribe("status", move |_| *seen.lock().expect("lock") += 1);
    }

    socket.dispatch("no_such_event", &Value::Null);
    assert_eq!(*seen.lock().expect("lock"), 0);
}

#[test]
fn handlers_receive_the_envelope_payload() {
    let socket = Socket::new();
    let seen = Arc::new(StdMutex::new(Vec::new()));

    {
        let seen = Arc::clone(&seen);
        socket.subscribe("new_card", move |payload| {
            seen.lock().expect("lock").push(payload.clone());
        });
    }

    let payload = serde_json::json!({"source": "SakuraFM", "card": {"data": {}}});
    socket.dispatch("new_card", &payload);
    assert_eq!(*seen.lock().expect("lock"), vec![payload]);
}

#[test]
fn unsubscribe_removes_only_that_handler() {
    let socket = Socket::new();
    let seen = Arc::new(StdMutex::new(Vec::new()));

    let first = {
        let seen = Arc::clone(&seen);
        socket.subscribe("status", move |_| seen.lock().expect("lock").push("first"))
    };
    {
        let seen = Arc::clone(&seen);
        socket.subscribe("status", move |_| seen.lock().expect("lock").push("second"));
    }

    socket.unsubscribe("status", first);
    socket.dispatch("status", &Value::Null);
    assert_eq!(*seen.lock().expect("lock"), vec!["second"]);
}

#[test]
fn send_while_disconnected_drops_message_and_emits_error_event() {
    let socket = Socket::new();
    let seen = Arc::new(StdMutex::new(Vec::new()));

    {
        let seen = Arc::clone(&seen);
        socket.subscribe("error", move |payload| {
            seen.lock().expect("lock").push(payload.clone());
        });
    }

    let sent = socket.send("extract_sakura", serde_json::json!({"url": "http://example.com"}));
    assert!(!sent);

    let seen = seen.lock().expect("lock");
    assert_eq!(seen.len(), 1);
    assert_eq!(
        seen[0]["message"],
        "Cannot send message. WebSocket is not connected."
    );
}

#[test]
fn send_while_connected_queues_exactly_one_envelope() {
    let socket = Socket::new();
    let (tx, mut rx) = futures::channel::mpsc::unbounded::<String>();
    if let Ok(mut guard) = socket.inner.tx.lock() {
        *guard = Some(tx);
    }
    socket.inner.connected.store(true, Ordering::SeqCst);

    let sent = socket.send("extract_sakura", serde_json::json!({"url": "http://example.com"}));
    assert!(sent);

    let text = rx.try_next().expect("queued").expect("message");
    let value: Value = serde_json::from_str(&text).expect("json");
    assert_eq!(
        value,
        serde_json::json!({"type": "extract_sakura", "payload": {"url": "http://example.com"}})
    );
    assert!(rx.try_next().is_err());
}

#[test]
fn handler_may_send_from_within_dispatch() {
    // send() inside a handler re-enters dispatch; must not deadlock.
    let socket = Socket::new();
    let errors = Arc::new(StdMutex::new(0_u32));

    {
        let errors = Arc::clone(&errors);
        socket.subscribe("error", move |_| *errors.lock().expect("lock") += 1);
    }
    {
        let inner = socket.clone();
        socket.subscribe("status", move |_| {
            inner.send("extract_sakura", Value::Null);
        });
    }

    socket.dispatch("status", &Value::Null);
    assert_eq!(*errors.lock().expect("lock"), 1);
}

#[test]
fn reconnect_delay_is_configurable() {
    let socket = Socket::with_reconnect_delay(Duration::from_millis(500));
    assert_eq!(socket.reconnect_delay(), Duration::from_millis(500));
    assert_eq!(Socket::new().reconnect_delay(), Duration::from_secs(2));
}
