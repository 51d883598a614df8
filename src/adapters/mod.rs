//! Adapters: concrete implementations of the hexagonal port traits.
//!
//! | Adapter        | Implements         | Connects to                 |
//! |----------------|--------------------|-----------------------------|
//! | `hardware`     | OutputPort         | embedded-hal output pin     |
//! |                | ResetPort          | esp_restart                 |
//! |                | UplinkPort         | (delegates to an uplink port)|
//! | `log_sink`     | EventSink          | Serial log output           |
//! | `nvs`          | ConfigPort         | NVS / in-memory store       |
//! | `uplink_queue` | UplinkPort         | Radio stack TX queue        |

pub mod hardware;
pub mod log_sink;
pub mod nvs;
pub mod uplink_queue;
