use std::fs;
use std::thread;
use std::time::{Duration, Instant};
use anyhow::Result;
use tempfile::tempdir;
use super::Writer;
use super::format::{FileHeader, RecordHeader, Timestamp, FILE_HEADER_LEN, RECORD_HEADER_LEN};
use super::timer::Timer;

#[test]
fn file_header_round_trip() {
    let hdr   = FileHeader::new();
    let bytes = hdr.encode();
    assert_eq!(FILE_HEADER_LEN, bytes.len());
    assert_eq!([0xd4u8, 0xc3, 0xb2, 0xa1][..], bytes[0..4]);

    let back = FileHeader::decode(&bytes).unwrap();
    assert_eq!(hdr, back);
    assert_eq!(0xa1b2_c3d4, back.magic);
    assert_eq!(2, back.major);
    assert_eq!(4, back.minor);
    assert_eq!(0, back.zone);
    assert_eq!(0, back.sigfigs);
    assert_eq!(1, back.network);

    assert_eq!(None, FileHeader::decode(&bytes[..10]));
}

#[test]
fn record_header_round_trip() {
    let hdr = RecordHeader::new(Timestamp { sec: 1000, usec: 999_999 }, 54);
    assert_eq!(54, hdr.incl);
    assert_eq!(54, hdr.orig);

    let bytes = hdr.encode();
    assert_eq!(RECORD_HEADER_LEN, bytes.len());
    let back = RecordHeader::decode(&bytes).unwrap();
    assert_eq!(hdr, back);

    assert_eq!(None, RecordHeader::decode(&bytes[..8]));
}

#[test]
fn timestamp_step_spacing() {
    let ts = Timestamp { sec: 5, usec: 0 };
    assert_eq!(Timestamp { sec: 5, usec: 5 }, ts.step());

    let ts = Timestamp { sec: 5, usec: 999_998 };
    assert_eq!(Timestamp { sec: 6, usec: 3 }, ts.step());
    assert!(ts < ts.step());

    let now = Timestamp::now();
    assert_eq!(0, now.usec % 1000);
    assert!(now.usec < 1_000_000);
}

#[test]
fn timer_rearms_after_firing() {
    let mut timer = Timer::new(Duration::from_millis(50));
    let start = Instant::now();
    assert!(!timer.ready(start));

    let later = start + Duration::from_millis(60);
    assert!(timer.ready(later));
    assert!(!timer.ready(later));
    assert!(timer.ready(later + Duration::from_millis(60)));
}

#[test]
fn writes_one_header_across_flushes() -> Result<()> {
    let dir  = tempdir()?;
    let path = dir.path().join("trace.pcap");
    let writer = Writer::new(path.clone(), 64, Duration::from_secs(600));

    writer.append(&[0x11; 100]);
    assert_eq!(100, writer.pending());
    writer.flush(false);
    writer.flush(false);
    assert_eq!(0, writer.pending());
    assert_eq!(FILE_HEADER_LEN + 100, fs::read(&path)?.len());

    writer.append(&[0x22; 70]);
    writer.flush(false);

    let data = fs::read(&path)?;
    assert_eq!(FILE_HEADER_LEN + 170, data.len());
    let hdr = FileHeader::decode(&data).unwrap();
    assert_eq!(0xa1b2_c3d4, hdr.magic);
    assert_eq!(0x11, data[FILE_HEADER_LEN]);
    assert_eq!(0x22, data[FILE_HEADER_LEN + 100]);
    Ok(())
}

#[test]
fn holds_until_forced() -> Result<()> {
    let dir  = tempdir()?;
    let path = dir.path().join("trace.pcap");
    let writer = Writer::new(path.clone(), 1024, Duration::from_secs(600));

    writer.append(&[0u8; 10]);
    writer.flush(false);
    assert!(!path.exists());
    assert_eq!(10, writer.pending());

    writer.flush(true);
    assert_eq!(0, writer.pending());
    assert_eq!(FILE_HEADER_LEN + 10, fs::read(&path)?.len());

    // nothing buffered, a second flush is a no-op
    writer.flush(true);
    assert_eq!(FILE_HEADER_LEN + 10, fs::read(&path)?.len());
    Ok(())
}

#[test]
fn interval_elapses() -> Result<()> {
    let dir  = tempdir()?;
    let path = dir.path().join("trace.pcap");
    let writer = Writer::new(path.clone(), 1024 * 1024, Duration::from_millis(10));

    writer.append(&[0u8; 8]);
    thread::sleep(Duration::from_millis(30));
    writer.flush(false);
    assert_eq!(0, writer.pending());
    assert_eq!(FILE_HEADER_LEN + 8, fs::read(&path)?.len());
    Ok(())
}

#[test]
fn failed_write_keeps_the_buffer() -> Result<()> {
    let _ = env_logger::builder().is_test(true).try_init();

    let dir  = tempdir()?;
    let path = dir.path().join("missing").join("trace.pcap");
    let writer = Writer::new(path.clone(), 8, Duration::from_secs(600));

    writer.append(&[0u8; 16]);
    writer.flush(true);
    assert_eq!(16, writer.pending());
    assert!(!path.exists());

    writer.flush(true);
    assert_eq!(16, writer.pending());

    // once the directory shows up the retry drains the buffer
    fs::create_dir(dir.path().join("missing"))?;
    writer.flush(true);
    assert_eq!(0, writer.pending());
    assert_eq!(FILE_HEADER_LEN + 16, fs::read(&path)?.len());
    Ok(())
}
