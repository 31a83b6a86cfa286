use quad_canvas::*;

///
/// How a line in the demo is drawn
///
#[derive(Clone, Copy, PartialEq, Debug, Serialize, Deserialize)]
pub struct LineStyle {
    /// Width of the stroke, in canvas units
    pub width: f32,

    /// Colour of the stroke
    pub color: Color
}

///
/// How the draggable point markers are drawn
///
#[derive(Clone, Copy, PartialEq, Debug, Serialize, Deserialize)]
pub struct PointStyle {
    /// Radius of the marker circle (also the hit-testing radius)
    pub radius: f32,

    /// Width of the marker outline
    pub width: f32,

    /// Colour of the marker outline
    pub color: Color,

    /// Colour the marker is filled with
    pub fill: Color
}

///
/// Styles for every element the demo draws
///
#[derive(Clone, Copy, PartialEq, Debug, Serialize, Deserialize)]
pub struct StyleSpec {
    /// The main curve
    pub curve: LineStyle,

    /// The control polygon connecting the three points
    pub control_line: LineStyle,

    /// The fitted curve between the end points
    pub fitted_curve: LineStyle,

    /// The fitted curve extended past the end points
    pub extended_curve: LineStyle,

    /// The draggable point markers
    pub point: PointStyle
}

impl Default for StyleSpec {
    fn default() -> StyleSpec {
        StyleSpec {
            curve:          LineStyle { width: 2.0, color: Color::Rgba(0.2, 0.2, 0.2, 1.0) },
            control_line:   LineStyle { width: 1.0, color: Color::Rgba(0.8, 0.0, 0.0, 1.0) },
            fitted_curve:   LineStyle { width: 1.0, color: Color::Rgba(0.0, 0.0, 1.0, 1.0) },
            extended_curve: LineStyle { width: 1.0, color: Color::Rgba(0.0, 1.0, 0.0, 1.0) },
            point:          PointStyle {
                radius: 10.0,
                width:  2.0,
                color:  Color::Rgba(0.6, 0.0, 0.0, 1.0),
                fill:   Color::Rgba(200.0/255.0, 200.0/255.0, 200.0/255.0, 1.0).with_alpha(0.5)
            }
        }
    }
}
