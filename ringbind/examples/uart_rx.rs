//! Example: UART Receive Queue
//!
//! This example demonstrates how to:
//! - Bind a ring to a statically sized receive buffer
//! - Feed it from an "interrupt" producer that never blocks
//! - Drain it from a polling main loop with `nb`
//! - Inspect queued data through a view without consuming it
//! - Align the queue into one contiguous slice before checksumming

#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(not(feature = "std"), no_main)]

#[cfg(feature = "std")]
use ringbind::{Mode, Ring, RingBuffer};

/// Receive buffer size; 15 bytes usable
#[cfg(feature = "std")]
const RX_SLOTS: usize = 16;

#[cfg(feature = "std")]
fn main() {
    println!("=== Ringbind UART Receive Example ===\n");

    let mut rx_storage = [0u8; RX_SLOTS];
    let mut rx = Ring::bind(&mut rx_storage);

    // Burst 1 arrives while the main loop is busy
    on_uart_interrupt(&mut rx, b"\r\n$TEMP,21\n");
    println!("queued {} bytes, {} free", rx.len(), rx.free());

    // Peek at the queue without consuming it
    let preview = rx.dup();
    print!("preview: ");
    preview.each(|b| print!("{}", printable(*b)));
    println!();

    // Drop line noise at the front, then drain one frame
    rx.trim(|b| *b == b'\r' || *b == b'\n');
    let mut frame = [0u8; RX_SLOTS];
    let mut len = 0;
    while let Ok(byte) = rx.poll_read() {
        if byte == b'\n' {
            break;
        }
        frame[len] = byte;
        len += 1;
    }
    println!("frame: {}", core::str::from_utf8(&frame[..len]).unwrap_or("<binary>"));

    // Burst 2 overruns the buffer: oldest bytes are dropped
    on_uart_interrupt(&mut rx, b"$HUMID,48,$PRESS,1013\n");
    println!("after overrun: {} bytes, full = {}", rx.len(), rx.is_full());

    // Lay the queue out contiguously and checksum it in place
    rx.align();
    let sum = rx.iter().fold(0u8, |acc, b| acc.wrapping_add(b));
    println!("aligned cursors {:?}, checksum 0x{:02X}", rx.cursors(), sum);

    rx.clear();
    println!("cleared, empty = {}", rx.is_empty());
}

/// Producer side: never blocks, never fails
#[cfg(feature = "std")]
fn on_uart_interrupt<M: Mode, const N: usize>(rx: &mut RingBuffer<'_, u8, N, M>, bytes: &[u8]) {
    for byte in bytes {
        rx.write(*byte);
    }
}

#[cfg(feature = "std")]
fn printable(byte: u8) -> char {
    match byte {
        b'\r' => '␍',
        b'\n' => '␊',
        b => b as char,
    }
}
