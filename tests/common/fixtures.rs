use edlkit::EdmObject;

/// A small but representative screen file: screen properties, a plain
/// widget, and a group holding a text label and a polyline.
pub const VACUUM_SCREEN: &str = r##"4 0 1
beginScreenProperties
major 4
minor 0
release 1
x 100
y 100
w 400
h 300
font "arial-medium-r-14.0"
bgColor index 3
fgColor index 14
showGrid
title "Vacuum - $(dom)"
endScreenProperties

# (Rectangle)
object activeRectangleClass
beginObjectProperties
major 4
minor 0
release 0
x 10
y 10
w 100
h 50
lineColor index 14
fill
fillColor index 25
endObjectProperties

# (Group)
object activeGroupClass
beginObjectProperties
major 4
minor 0
release 0
x 120
y 10
w 150
h 80

beginGroup

# (Static Text)
object activeXTextClass
beginObjectProperties
major 4
minor 0
release 0
x 130
y 20
w 60
h 20
font "arial-medium-r-10.0"
fgColor index 14
useDisplayBg
value {
  "Ion pump $(P)"
}
endObjectProperties

# (Lines)
object activeLineClass
beginObjectProperties
major 4
minor 0
release 0
x 130
y 50
w 40
h 20
lineColor index 14
numPoints 2
xPoints {
  0 130
  1 170
}
yPoints {
  0 50
  1 70
}
endObjectProperties

endGroup

visPv "#<NONE>"
endObjectProperties
"##;

/// A rectangle at a fixed spot, the workhorse of layout tests.
pub fn rect_at(x: i64, y: i64, w: i64, h: i64) -> EdmObject {
    let mut ob = EdmObject::new("Rectangle");
    ob.set_origin(x, y);
    ob.set_frame_size(w, h);
    ob
}
