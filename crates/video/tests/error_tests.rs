use std::io;
use video::VideoError;

#[test]
fn test_from_io_error_is_device_error() {
    let io_err = io::Error::new(io::ErrorKind::NotFound, "no such device");
    let err: VideoError = io_err.into();

    match err {
        VideoError::Device(msg) => assert!(msg.contains("no such device")),
        _ => panic!("Expected VideoError::Device"),
    }
}

#[test]
fn test_from_image_error_is_decode_error() {
    let err: VideoError = image::ImageError::Decode("bad JPEG".to_string()).into();
    assert!(matches!(err, VideoError::Decode(_)));
    assert!(err.to_string().contains("bad JPEG"));
}

#[test]
fn test_error_display() {
    assert_eq!(
        VideoError::Device("camera 3 unavailable".to_string()).to_string(),
        "device error: camera 3 unavailable"
    );
    assert_eq!(
        VideoError::Stream("timeout".to_string()).to_string(),
        "stream error: timeout"
    );
}
