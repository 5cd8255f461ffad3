use std::fs::File;
use std::io::{self, Read};
use std::os::fd::{AsRawFd, FromRawFd, RawFd};
use std::time::Duration;

/// return the (read, write) ends of a fresh pipe
pub fn pipe() -> io::Result<(File, File)> {
    let mut fds: [RawFd; 2] = [-1; 2];
    // SAFETY: pipe fills both slots of a stack array we own.
    if unsafe { libc::pipe(fds.as_mut_ptr()) } != 0 {
        return Err(io::Error::last_os_error());
    }
    // SAFETY: both descriptors were just opened and nothing else owns them.
    Ok(unsafe { (File::from_raw_fd(fds[0]), File::from_raw_fd(fds[1])) })
}

/// return the (master, slave) ends of a pseudo-terminal in raw mode,
/// so "\n" reaches the master without being turned into "\r\n"
pub fn pty() -> io::Result<(File, File)> {
    let mut master: RawFd = -1;
    let mut slave: RawFd = -1;
    // SAFETY: openpty writes two descriptors into stack locals, name/termios/winsize may be null.
    let rc = unsafe {
        libc::openpty(
            &mut master,
            &mut slave,
            std::ptr::null_mut(),
            std::ptr::null_mut(),
            std::ptr::null_mut(),
        )
    };
    if rc != 0 {
        return Err(io::Error::last_os_error());
    }
    // SAFETY: both descriptors were just opened and nothing else owns them.
    let (master, slave) = unsafe { (File::from_raw_fd(master), File::from_raw_fd(slave)) };

    // SAFETY: termios is plain data, tcgetattr fully initializes it before use.
    unsafe {
        let mut attrs: libc::termios = std::mem::zeroed();
        if libc::tcgetattr(slave.as_raw_fd(), &mut attrs) != 0 {
            return Err(io::Error::last_os_error());
        }
        libc::cfmakeraw(&mut attrs);
        if libc::tcsetattr(slave.as_raw_fd(), libc::TCSANOW, &attrs) != 0 {
            return Err(io::Error::last_os_error());
        }
    }
    Ok((master, slave))
}

/// read exactly `len` bytes from the pty master
pub fn read_exact(master: &mut File, len: usize) -> io::Result<Vec<u8>> {
    let mut buf = vec![0u8; len];
    master.read_exact(&mut buf)?;
    Ok(buf)
}

/// true if more bytes show up on `file` within `wait`
pub fn has_more(file: &File, wait: Duration) -> io::Result<bool> {
    let mut fds = libc::pollfd {
        fd: file.as_raw_fd(),
        events: libc::POLLIN,
        revents: 0,
    };
    // SAFETY: a single pollfd on the stack, matching the count passed in.
    let ready = unsafe { libc::poll(&mut fds, 1, wait.as_millis() as libc::c_int) };
    if ready < 0 {
        return Err(io::Error::last_os_error());
    }
    Ok(ready > 0 && fds.revents & libc::POLLIN != 0)
}
