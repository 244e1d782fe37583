use crate::app::App;
use crate::mpris::MprisHandle;

pub fn update_mpris(mpris: &MprisHandle, app: &App) {
    mpris.set_track_metadata(app.current_song());
    mpris.set_playback(app.playback_state());
    mpris.set_volume(f64::from(app.playback.volume()));
}
