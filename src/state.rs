use crate::*;
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum KeysError {
    #[error("unknown movement key {0:?}, expected one of w a s d q e or '.'")]
    Unknown(char),
    #[error("unexpected {0:?} in key sequence")]
    Unbalanced(char),
    #[error("unclosed '[' in key sequence")]
    Unclosed,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Key {
    Up,
    Down,
    Left,
    Right,
    Forward,
    Back,
}

impl Key {
    /// `.` is a frame with nothing held.
    pub fn parse(c: char) -> Result<Option<Key>, KeysError> {
        use Key::*;
        Ok(Some(match c.to_ascii_lowercase() {
            'w' => Up,
            's' => Down,
            'a' => Left,
            'd' => Right,
            'q' => Forward,
            'e' => Back,
            '.' => return Ok(None),
            other => return Err(KeysError::Unknown(other)),
        }))
    }

    fn axis(self) -> V3 {
        use Key::*;
        match self {
            Up => V3::y(),
            Down => -V3::y(),
            Left => -V3::x(),
            Right => V3::x(),
            Forward => V3::z(),
            Back => -V3::z(),
        }
    }
}

/// Keys held in each frame. A bare key is a frame of its own and `[...]`
/// holds several at once, so `w[wd].` is up, up-and-right, then nothing.
pub fn parse_keys(seq: &str) -> Result<Vec<Vec<Key>>, KeysError> {
    let mut frames = vec![];
    let mut group: Option<Vec<Key>> = None;
    for c in seq.chars().filter(|c| !c.is_whitespace()) {
        match c {
            '[' if group.is_none() => group = Some(vec![]),
            '[' => return Err(KeysError::Unbalanced(c)),
            ']' => frames.push(group.take().ok_or(KeysError::Unbalanced(c))?),
            _ => {
                let key = Key::parse(c)?;
                match group.as_mut() {
                    Some(held) => held.extend(key),
                    None => frames.push(key.into_iter().collect()),
                }
            }
        }
    }
    match group {
        Some(_) => Err(KeysError::Unclosed),
        None => Ok(frames),
    }
}

/// State the application mutates between frames. Rendering only reads it.
#[derive(Clone, Debug, PartialEq)]
pub struct SceneState {
    pub light_position: P3,
    /// Units per second.
    pub speed: f32,
    /// Fraction of the way toward the target covered per update.
    pub smoothing: f32,
}

impl SceneState {
    pub fn new(light_position: P3) -> Self {
        SceneState {
            light_position,
            speed: 5.0,
            smoothing: 0.3,
        }
    }

    pub fn update(&mut self, held: &[Key], dt: f32) {
        let target = held
            .iter()
            .fold(self.light_position, |p, k| p + k.axis() * self.speed * dt);
        self.light_position += (target - self.light_position) * self.smoothing;
    }

    pub fn apply(&self, scene: &mut scene::Scene) {
        scene.set_light_position(self.light_position);
    }
}
