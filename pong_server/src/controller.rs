use anyhow::{Context, Result};
use game_core::{InputEvent, InputSource};
use proto::ControllerHub;
use tokio::net::UdpSocket;
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};
use tokio::task::JoinHandle;
use tracing::{debug, warn};

const MAX_DATAGRAM: usize = 512;

/// Tick-loop end of the controller channel
pub struct ChannelInput {
    rx: UnboundedReceiver<InputEvent>,
}

impl InputSource for ChannelInput {
    fn poll_events(&mut self) -> Vec<InputEvent> {
        let mut events = Vec::new();
        while let Ok(event) = self.rx.try_recv() {
            events.push(event);
        }
        events
    }
}

pub async fn bind(port: u16) -> Result<UdpSocket> {
    UdpSocket::bind(("0.0.0.0", port))
        .await
        .with_context(|| format!("binding controller port {port}"))
}

/// Receive controller datagrams in the background and hand the decoded
/// events to the tick loop
pub fn spawn_listener(socket: UdpSocket, hub: ControllerHub) -> (JoinHandle<()>, ChannelInput) {
    let (tx, rx) = mpsc::unbounded_channel();
    let handle = tokio::spawn(listen(socket, hub, tx));
    (handle, ChannelInput { rx })
}

async fn listen(socket: UdpSocket, mut hub: ControllerHub, tx: UnboundedSender<InputEvent>) {
    let mut buf = [0u8; MAX_DATAGRAM];
    loop {
        let (len, from) = match socket.recv_from(&mut buf).await {
            Ok(received) => received,
            Err(err) => {
                warn!(%err, "controller receive failed");
                continue;
            }
        };

        let handled = match hub.handle_datagram(&buf[..len], from) {
            Ok(handled) => handled,
            Err(err) => {
                warn!(%err, %from, "dropping controller datagram");
                continue;
            }
        };

        if let Some((addr, reply)) = handled.reply {
            if let Err(err) = socket.send_to(&reply.to_bytes(), addr).await {
                warn!(%err, %addr, "controller reply failed");
            }
        }

        for event in handled.events {
            if tx.send(event).is_err() {
                debug!("tick loop gone, controller listener stopping");
                return;
            }
        }
    }
}
