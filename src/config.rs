use crate::prelude::*;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Number of simulation ticks per second of real time.
    pub ticks_per_second: f32,
    /// The frame rate the FPS counter is measured against.
    pub max_fps: f32,
    /// Window size assumed until the first frame reports the real one.
    pub initial_window: (Coord, Coord),
    pub mole: MoleConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MoleConfig {
    pub width: Coord,
    pub height: Coord,
    /// Animation speed in pixels per tick.
    pub speed: Coord,
    /// How long a mole stays up before it starts hiding.
    pub max_age: Time,
}

impl Config {
    pub async fn load(path: impl AsRef<std::path::Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let content = file::load_string(path)
            .await
            .context(format!("when loading config file at {:?}", path))?;
        ron::from_str(&content).context(format!("when parsing config file at {:?}", path))
    }

    pub fn tick_duration(&self) -> Time {
        r32(1.0 / self.ticks_per_second)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            ticks_per_second: 60.0,
            max_fps: 60.0,
            initial_window: (600.0, 400.0),
            mole: MoleConfig::default(),
        }
    }
}

impl Default for MoleConfig {
    fn default() -> Self {
        Self {
            width: 64.0,
            height: 64.0,
            speed: 20.0,
            max_age: r32(1.5),
        }
    }
}

impl MoleConfig {
    pub fn size(&self) -> vec2<Coord> {
        vec2(self.width, self.height)
    }
}
