use anyhow::{Context, Result};
use game_core::Surface;
use proto::frame;
use tokio::net::UdpSocket;

/// Frame buffer that is sent to a Matelight as one datagram per flush
pub struct MatelightDisplay {
    socket: UdpSocket,
    surface: Surface,
}

impl MatelightDisplay {
    pub async fn connect(host: &str, port: u16, width: u32, height: u32) -> Result<Self> {
        let socket = UdpSocket::bind(("0.0.0.0", 0))
            .await
            .context("binding display socket")?;
        socket
            .connect((host, port))
            .await
            .with_context(|| format!("resolving display {host}:{port}"))?;

        Ok(Self {
            socket,
            surface: Surface::new(width, height),
        })
    }

    pub fn surface_mut(&mut self) -> &mut Surface {
        &mut self.surface
    }

    /// Send the current frame
    pub async fn flush(&self) -> Result<()> {
        let bytes = frame::encode(&self.surface);
        self.socket
            .send(&bytes)
            .await
            .context("sending frame to display")?;
        Ok(())
    }
}
