use assert_cmd::Command;

pub fn moodiary_cmd() -> Command {
    let mut cmd = Command::cargo_bin("moodiary").unwrap();
    cmd.env_remove("MOODIARY_ROOT");
    cmd.env_remove("WEATHER_API_KEY");
    cmd.env_remove("EDITOR");
    cmd.env_remove("VISUAL");
    cmd
}
