//! Adapters — concrete implementations of the hexagonal port traits.
//!
//! | Adapter     | Implements                     | Connects to                 |
//! |-------------|--------------------------------|-----------------------------|
//! | `hardware`  | PresenceSensor, AmbientLight-  | GPIO, BMP280 ×2 (I2C),      |
//! |             | Sensor, TemperatureSource,     | Senseair S8, servo PWM      |
//! |             | Co2Source, DigitalOutput,      |                             |
//! |             | WindowServo                    |                             |
//! | `log_sink`  | EventSink                      | Serial log output           |
//! | `uart_link` | ModbusLink                     | ESP-IDF UART (espidf only)  |

pub mod hardware;
pub mod log_sink;
pub mod uart_link;
