//! VSOP87C series for Earth: heliocentric X, Y, Z on the ecliptic and equinox of date.

use std::f64::consts::PI;

use super::super::{Reference, Term, Variables, Vsop87Table};

const X0: &[Term] = &[
    [0.99986069925, 1.75347045757, 6283.3196674749],
    [0.02506324281, 4.93819429098, 0.2438174835],
    [0.00835274807, 1.71033525539, 12566.3955174663],
    [0.00010466796, 1.66721984219, 18849.4713674577],
    [0.00003490608, 4.44373803231, 6282.83203250789],
    [0.00003110838, 0.66875189331, 83997.09113559539],
    [0.00002561408, 0.5858860749, 529.9347825781],
    [0.00002142365, 1.09204474884, 1577.0997249643],
    [0.00001709161, 0.49540863237, 6279.7965491259],
    [0.00001707934, 6.15314019418, 6286.84278582391],
    [0.00001442753, 3.47210398336, 2353.1099712553],
    [0.00001113027, 3.69621650479, 5223.4501023187],
    [0.00000934484, 6.07385378286, 12036.7045523717],
    [0.00000899854, 3.17607463681, 10213.5293636945],
    [0.0000056682, 2.15241946891, 1059.6257476727],
    [0.00000661858, 1.31175222119, 5753.6287023803],
    [0.00000739644, 4.36662524112, 398.3928208917],
    [0.00000681381, 2.2181539794, 4705.9761250271],
    [0.00000611293, 5.38470180335, 6813.0106325695],
    [0.00000451129, 6.09315891204, 5885.1706640667],
    [0.00000451985, 1.27931036318, 6257.0213476751],
    [0.00000449743, 5.36941929064, 6309.61798727471],
    [0.00000406291, 0.54369369385, 6681.46867088311],
    [0.00000541115, 0.78670634299, 775.7664288075],
    [0.00000546682, 1.46109463961, 14143.7390599141],
    [0.0000051378, 4.4369503779, 7860.6632099227],
    [0.00000263916, 5.3955175263, 5507.7970561509],
    [0.0000021722, 4.51265697015, 11507.0135872771],
    [0.00000292146, 2.51372357301, 5507.3094211839],
    [0.00000227915, 1.23940916733, 7058.8422787989],
    [0.00000226835, 3.27356345008, 4693.75913722409],
    [0.00000255833, 2.26545070197, 12168.2465140581],
    [0.00000256157, 1.45478864804, 710.1768660418],
    [0.00000178679, 2.96645630109, 796.5418242999],
    [0.00000178303, 0.40472561766, 6283.25235717211],
    [0.00000178303, 6.24380795499, 6283.3869777777],
    [0.00000155471, 1.62414733243, 25132.5472174491],
    [0.00000155246, 1.41969109555, 5487.0216606585],
    [0.0000020764, 5.85326148962, 11790.8729061423],
    [0.00000199988, 4.0721683011, 17790.08943726851],
    [0.0000012897, 5.21698329136, 7079.61767429131],
    [0.00000128155, 4.80258701251, 3739.0052475915],
    [0.00000152241, 0.86901699174, 213.5429129215],
    [0.00000078109, 1.84890519772, 8827.6340873583],
    [0.00000073503, 2.69517697923, 1589.3167127673],
    [0.00000093001, 3.93777887053, 9437.5191174035],
    [0.00000065526, 3.6556833316, 11770.0975106499],
    [0.0000006324, 2.24124127597, 6262.5442719825],
    [0.00000062961, 4.40729385308, 6304.0950629673],
    [0.0000008587, 3.02430778985, 167284.005405149],
    [0.00000083233, 6.19780778434, 3340.8562441833],
    [0.0000006285, 2.03823135444, 7.3573644843],
    [0.00000079971, 2.49335782552, 6070.0205720369],
    [0.00000060043, 3.39955163445, 4137.1542509997],
    [0.00000075613, 4.15948190002, 6496.6187629129],
    [0.00000053731, 1.5626889204, 1194.6908277081],
    [0.00000057574, 3.96971590315, 6284.2999885431],
    [0.00000057574, 2.6788176695, 6282.3393464067],
    [0.00000072385, 4.85114866885, 10976.83498721549],
    [0.00000051135, 1.31237333336, 6290.4332144757],
    [0.00000050604, 5.34520074613, 6276.2061204741],
    [0.00000049613, 2.64370047145, 6127.8992680407],
    [0.00000048009, 4.00571885519, 6438.7400669091],
    [0.00000059233, 3.78322753249, 3154.4432674121],
    [0.00000048264, 4.77126143981, 801.5771136403],
    [0.00000047368, 6.10696378485, 3128.6325825793],
    [0.00000039225, 3.25281924495, 8429.4850839501],
    [0.00000051307, 5.78448747277, 12353.0964220283],
    [0.00000050639, 2.05215225623, 11856.462468908],
    [0.00000039555, 4.93022654622, 5481.4987363511],
    [0.00000042757, 3.64063452002, 17260.3984721739],
    [0.00000048941, 0.45355151773, 9225.7830907665],
    [0.00000048302, 0.60366334071, 2544.07060239989],
    [0.00000037971, 3.04093006964, 426.8420083595],
    [0.00000043643, 3.14688065147, 5856.23384163189],
    [0.0000003183, 2.00885127406, 2145.92159899169],
    [0.00000033959, 1.72230567102, 7085.1405985987],
    [0.00000030184, 3.96882361878, 10977.32262218251],
    [0.00000032562, 2.84647033523, 4164.0681721295],
    [0.00000038887, 5.36022568355, 13367.7288136231],
    [0.00000028515, 6.10933021457, 12569.91863581531],
    [0.00000028873, 1.01228967614, 3930.4535137031],
    [0.00000036633, 2.90798803424, 18073.9487561337],
    [0.00000024984, 2.17919076736, 26.0545023163],
    [0.00000026364, 0.54621601823, 9438.0067523705],
    [0.00000030326, 1.99372292658, 4535.3032544079],
    [0.00000028166, 0.48127325062, 12562.8723991173],
    [0.00000028001, 2.82603231075, 5088.8726572503],
    [0.00000021157, 5.07256589577, 11371.9485072417],
    [0.00000023113, 0.8599693017, 5223.93773728571],
    [0.00000021642, 4.63524157818, 12559.2819704655],
    [0.00000019448, 4.40136974621, 12565.9078824993],
    [0.00000026055, 0.30340363466, 71430.45180064559],
    [0.00000018232, 3.4136209513, 1747.7725955835],
    [0.00000023248, 6.19009992884, 18319.7804023631],
    [0.00000022785, 1.1682184896, 5753.14106741329],
    [0.00000017091, 0.58584172932, 4933.4522578161],
    [0.00000019399, 4.43188457477, 10447.14402212089],
    [0.00000021067, 3.80033599994, 7477.7666776995],
    [0.0000002131, 4.65919931667, 8031.3360805419],
    [0.00000014189, 1.30988546287, 2942.7072407751],
    [0.00000013864, 4.59350621319, 8636.18582124671],
    [0.00000018884, 2.42694418444, 156137.71980228278],
    [0.00000017875, 0.15660631596, 1592.8398311163],
    [0.00000018602, 0.50024326019, 17297.9385098427],
    [0.00000013605, 5.19720916665, 13096.0864825609],
    [0.00000015064, 3.1214803835, 16496.6052136859],
    [0.00000012969, 6.06491705231, 7633.1870771337],
    [0.00000014403, 1.4372592278, 20426.8149099055],
    [0.00000013311, 3.60732173221, 12139.7973265903],
    [0.00000013645, 5.14981984839, 13368.2164485901],
    [0.00000011583, 5.46063496654, 5331.6012612243],
    [0.00000011405, 4.40016025355, 529.44714761109],
    [0.00000015057, 5.21434071429, 7084.6529636317],
    [0.0000001433, 6.02775140319, 7342.7015976641],
    [0.00000012375, 3.10941922715, 6279.72923882311],
    [0.00000012366, 3.53911446993, 6286.9100961267],
    [0.00000010016, 2.24542867964, 397.9051859247],
    [0.00000012435, 1.06626484546, 15110.7099373497],
    [0.00000009513, 1.19056065248, 7235.0380737255],
    [0.00000010997, 2.19198404583, 10989.0519750185],
    [0.00000011583, 4.05250824543, 5729.7502646325],
    [0.00000009034, 5.42875830514, 9623.9320941747],
    [0.00000011842, 4.16957446176, 15721.0826023619],
    [0.00000008869, 5.04690919891, 6148.2545874395],
    [0.00000008614, 1.60161199451, 6418.38474751031],
    [0.00000010312, 2.59789642414, 6836.8890703173],
    [0.00000008411, 2.44368872285, 14712.5609339415],
    [0.00000007911, 3.15428722892, 2119.00767786191],
    [0.00000010379, 4.81870974023, 1349.62359217529],
    [0.00000010374, 2.40569215505, 5486.53402569149],
    [0.0000001048, 2.95288921695, 5999.4603486097],
    [0.00000007404, 5.4141904987, 6040.5910635009],
    [0.00000007357, 3.83057351958, 5088.3850222833],
    [0.0000000982, 3.69556241034, 6567.1789863401],
    [0.00000007018, 1.23420241153, 6526.04827144891],
    [0.00000009668, 1.92238869394, 21228.1482060623],
    [0.00000007545, 1.23604547808, 12540.0971976665],
    [0.00000007202, 5.883915377, 6245.2919948391],
    [0.00000007144, 0.76464656573, 6321.3473401107],
    [0.00000008883, 3.89630774866, 5642.93474619389],
    [0.00000006626, 0.70123567856, 5327.7199258663],
    [0.00000007015, 4.136223607, 7860.17557495569],
    [0.00000006159, 0.94592300466, 12964.5445208745],
    [0.00000007413, 5.03498725246, 23543.4743221653],
    [0.00000006355, 5.03541099132, 1990.9888345245],
    [0.00000007286, 3.58219614228, 537.0483295789],
    [0.00000006314, 6.22485628824, 951.4745887671],
    [0.00000006257, 4.23208117686, 4690.7236538421],
    [0.00000006484, 3.20813291319, 16730.70750707931],
    [0.00000005803, 6.09476150956, 955.3559241251],
    [0.00000006391, 3.9760152675, 24073.1652872599],
    [0.0000000753, 0.20298795021, 10973.7995038335],
    [0.00000006921, 0.69969701816, 522.8212355773],
    [0.00000007626, 4.29336813013, 22004.1584523533],
    [0.00000007531, 3.51464444079, 18422.8731765817],
    [0.00000006902, 2.75534627331, 155.17658195069],
    [0.00000005434, 5.94625981048, 7238.9194090835],
    [0.00000006223, 2.24396249102, 18451.3223640495],
    [0.00000007296, 5.9898204027, 16730.21987211229],
    [0.00000005833, 2.32930728499, 640.1411037975],
    [0.00000007171, 6.14759594277, 3929.96587873609],
    [0.00000006251, 2.19374266424, 6277.7967431675],
    [0.00000006251, 4.45479090841, 6288.8425917823],
    [0.00000005683, 3.49552871951, 1551.2890401315],
    [0.00000006383, 0.64667497225, 5216.33655531789],
    [0.00000006194, 3.56522608256, 5230.5636493195],
    [0.00000005036, 3.83694551305, 14314.4119305333],
    [0.00000006774, 1.99358309023, 102.84895673509],
    [0.00000006224, 0.35231413534, 11014.8626598513],
    [0.00000004621, 1.34668136864, 553.32558535889],
    [0.00000006293, 2.32035231613, 5650.5359281617],
    [0.00000006297, 4.40170593853, 26088.1469590577],
    [0.00000005186, 0.71187314766, 77714.015285604],
    [0.00000006196, 2.58705857336, 84672.2320270212],
    [0.0000000616, 4.78250009298, 239424.6340718364],
    [0.00000005414, 2.9996195788, 6180.2268932563],
    [0.00000005413, 3.65415218952, 6386.4124416935],
    [0.00000004863, 3.76722359858, 90280.1669855868],
    [0.00000005711, 4.32712250291, 6916.1034067881],
    [0.0000000515, 4.10583483822, 1577.5873599313],
    [0.00000004269, 2.38358764863, 7875.91568110771],
    [0.00000004017, 3.785809031, 6254.8704800071],
    [0.00000004069, 2.42056660765, 3634.37720703489],
    [0.00000003993, 2.86272128776, 6311.7688549427],
    [0.00000004016, 5.24041079205, 4690.23601887509],
    [0.0000000529, 3.34482936009, 25158.3579022819],
    [0.00000004831, 2.83916520281, 5760.7422493811],
    [0.00000003487, 3.51068129706, 10447.6316570879],
    [0.0000000412, 3.29656037233, 6709.91785835091],
    [0.0000000441, 3.80589939396, 6805.89708556871],
    [0.00000004023, 6.22474978871, 4731.7868098599],
    [0.0000000398, 3.31931976159, 5856.7214765989],
    [0.00000003173, 5.19128151293, 1066.7392946735],
    [0.00000003293, 4.01637480858, 9917.45305702629],
    [0.00000002935, 3.67590980046, 12592.6938372661],
    [0.00000002979, 6.20067573402, 12566.4628277691],
    [0.0000000398, 1.19681754169, 13341.9181287903],
    [0.00000003892, 5.52571426134, 75.0254160508],
    [0.00000003042, 3.19425693799, 18053.1733606413],
    [0.00000003608, 5.60952778146, 6208.5380689076],
    [0.00000003721, 5.22104546686, 5966.9277978183],
    [0.00000003581, 1.0399523122, 6358.1012660422],
    [0.0000000288, 1.61225556126, 10575.6505004253],
    [0.00000002806, 4.2155161422, 5863.8350235997],
    [0.00000003626, 1.42632163253, 6599.7115371315],
    [0.00000002794, 5.69269191706, 8030.8484455749],
    [0.00000002729, 4.17319557124, 3.76693583251],
    [0.00000003625, 3.00192313835, 6020.2357441021],
    [0.00000003206, 2.15397091751, 11506.52595231009],
    [0.00000003556, 4.28947576556, 8428.9974489831],
    [0.00000002856, 3.33625143564, 12721.8159169005],
    [0.00000002611, 2.43261867894, 6702.8043113501],
    [0.00000002535, 1.58310702384, 31415.6230674405],
    [0.0000000352, 5.3798637151, 250570.9196747026],
    [0.00000003434, 3.64656923781, 6546.4035908477],
    [0.00000002572, 4.79831420582, 5884.68302909969],
    [0.00000002647, 3.81972272861, 2352.6223362883],
    [0.00000003026, 5.2407807498, 13916.2629271251],
    [0.00000002378, 3.62833713669, 2389.1378379327],
    [0.00000002979, 0.36159339669, 12566.32820716351],
    [0.00000003082, 1.77514222265, 14945.0723560709],
    [0.00000002716, 3.06935389211, 12029.5910053709],
    [0.00000002215, 5.26643739208, 13362.6935242827],
    [0.00000003032, 4.76553829426, 29088.5675985015],
    [0.00000002421, 3.15326621321, 11015.3502948183],
    [0.00000002275, 5.95465292259, 6077.1341190377],
    [0.00000002466, 5.59166943387, 16200.52890701769],
    [0.00000002529, 5.94709131586, 12043.8180993725],
    [0.00000002015, 2.48432239832, 6262.96434807611],
    [0.00000002218, 0.69324011482, 6489.5052159121],
    [0.00000002005, 4.16423892775, 6303.6749868737],
    [0.0000000201, 4.11254992503, 4700.87268422489],
    [0.00000002641, 4.28275048815, 4590.6663630055],
    [0.00000002438, 6.1291020556, 149.8070146181],
    [0.00000001893, 0.980574649, 6279.4383321169],
    [0.00000001893, 5.66795892365, 6287.2010028329],
    [0.00000002156, 2.0090223629, 18139.5383188994],
    [0.00000002071, 4.3217914441, 11926.4982311523],
    [0.00000002395, 0.13148357341, 1162.7185218913],
    [0.00000001954, 0.37275781655, 13518.1139237169],
    [0.00000002006, 0.31048315304, 3154.9309023791],
    [0.00000001776, 0.14855204887, 13521.9952590749],
    [0.00000001964, 0.2510315344, 4686.6455902233],
    [0.00000002332, 4.40649103371, 10022.0810975829],
    [0.00000001863, 5.26030609599, 242.97242145751],
    [0.00000001928, 4.59250450967, 5746.5151553795],
    [0.00000002436, 4.4077082348, 95143.3767384616],
    [0.00000002163, 1.41797907369, 6037.4880212455],
    [0.0000000225, 2.39728922664, 12669.4882916849],
    [0.00000002052, 5.23006608728, 6529.1513137043],
    [0.00000001886, 3.61213584641, 7238.4317741165],
    [0.0000000217, 5.49596575387, 19651.2922985815],
    [0.00000002058, 4.69821533065, 23013.7833570707],
    [0.00000001774, 2.08482289391, 6820.1241795703],
    [0.00000001841, 0.34653293659, 65147.37595065419],
    [0.00000001578, 5.64311385009, 4292.5746504339],
    [0.00000001577, 0.8077955919, 7632.6994421667],
    [0.00000001541, 1.80359816798, 13119.9649203087],
    [0.00000002012, 0.36995312887, 4292.0870154669],
    [0.00000001543, 0.68755069426, 6293.95633282471],
    [0.00000001543, 5.96098287839, 6272.6830021251],
    [0.00000001513, 0.65061890512, 20.5315780089],
    [0.00000001489, 2.95205535091, 110.45013870291],
    [0.00000001639, 4.44076102657, 17655.0243572331],
    [0.00000001443, 2.26329309493, 1052.51220067191],
    [0.00000001337, 3.06401553951, 2544.5582373669],
    [0.00000001797, 6.18654785499, 33018.7772947211],
    [0.00000001488, 5.67450527487, 76.50988875911],
    [0.00000001453, 5.460786546, 633.0275567967],
    [0.00000001349, 5.75097749599, 6016.7126257531],
    [0.00000001477, 4.14004774348, 12779.6946129043],
    [0.00000001688, 3.20087734666, 18875.2820522905],
    [0.00000001491, 6.22974184712, 9411.7084325707],
    [0.00000001471, 5.75779240419, 18636.1722720197],
    [0.00000001263, 0.9172897135, 12573.5090644671],
    [0.00000001685, 5.70877589839, 25934.3681485729],
    [0.00000001375, 1.08927160683, 2378.9206560881],
    [0.00000001641, 6.27664360507, 6.86972951729],
    [0.000000012, 1.47556274227, 11499.9000402763],
    [0.00000001272, 0.89738913067, 6549.9267091967],
    [0.00000001214, 1.22660393299, 10973.3118688665],
    [0.00000001406, 5.67596795657, 11790.3852711753],
    [0.00000001524, 4.27066787572, 18209.5740811437],
    [0.00000001149, 3.01961706159, 10177.5014970171],
    [0.00000001547, 4.02915828753, 11926.01059618529],
    [0.0000000146, 4.97235137781, 246.0754637129],
    [0.00000001323, 1.38571450422, 8661.9965060795],
    [0.00000001252, 1.41166880118, 6993.2527160332],
    [0.00000001459, 5.29807880334, 38.3768531213],
    [0.00000001235, 2.84096519816, 24357.0246061251],
    [0.00000001028, 2.51029997292, 6112.6467968557],
    [0.0000000133, 1.00065727327, 2146.4092339587],
    [0.00000001312, 1.10091584033, 12491.613918899],
    [0.00000001246, 4.66430542078, 5429.63565075589],
    [0.00000000992, 4.13817744468, 6453.9925380941],
    [0.00000000988, 0.97969587833, 8274.0646845159],
    [0.00000001365, 6.11146862666, 11371.4608722747],
    [0.0000000102, 2.82319817767, 4732.2744448269],
    [0.00000001191, 3.43008039922, 6290.36590417291],
    [0.00000001191, 3.21845317343, 6276.2734307769],
    [0.00000000978, 4.73852758176, 6247.2918007975],
    [0.00000000971, 1.91000724147, 6319.34753415231],
    [0.00000000962, 2.63568544853, 12565.4151963981],
    [0.00000001025, 2.21768401152, 12545.6201219739],
    [0.0000000099, 0.39039931315, 4694.2467721911],
    [0.00000000964, 1.7919273993, 3893.93801205869],
    [0.00000000944, 5.86379546667, 6259.44122972711],
    [0.00000000944, 0.78473810598, 6307.1981052227],
    [0.00000001092, 3.92065202481, 17797.2029842693],
    [0.00000001132, 1.0062852297, 17782.9758902677],
    [0.00000000859, 1.48109589441, 1692.40948698591],
    [0.00000001213, 4.04235990086, 82576.73740351178],
    [0.00000000942, 5.2279073711, 6298.57213865991],
    [0.00000000942, 1.42062620155, 6268.0671962899],
    [0.00000001045, 0.46195584294, 15508.8589407579],
    [0.00000000851, 5.19678367921, 6173.1133462555],
    [0.0000000085, 1.45204280805, 6393.5259886943],
    [0.00000000895, 2.40089211752, 3904.1551939033],
    [0.0000000102, 0.71539416375, 220.6564599223],
    [0.00000000845, 5.75499771232, 17256.8753538249],
    [0.00000000863, 4.43158774725, 949.4194264533],
    [0.00000000853, 2.75614337272, 16201.0165419847],
    [0.00000000811, 6.13459778682, 4803.9654584435],
    [0.00000000966, 4.14597367445, 206.42936592071],
    [0.00000000917, 2.47007329129, 149854.6439522914],
    [0.00000001083, 1.32514794865, 36948.9869909407],
    [0.00000000779, 3.58339682996, 2648.6986429565],
    [0.00000000964, 0.77431665261, 796.0541893329],
    [0.00000000995, 0.25423339373, 11403.9208130585],
    [0.00000000962, 3.92658368218, 12567.37583853451],
    [0.00000000779, 0.45683397157, 10213.0417287275],
    [0.0000000098, 4.62590378445, 22805.4917485101],
    [0.0000000093, 2.22316684933, 2787.2868413409],
    [0.00000000829, 5.09643797682, 5120.35732810009],
    [0.00000000733, 2.6094985693, 10575.1628654583],
    [0.00000000743, 3.79905998257, 7834.3648901229],
    [0.00000000818, 1.6436832849, 5572.8989839496],
    [0.00000000905, 3.81538816339, 6284.8041401832],
    [0.00000000905, 2.83314540925, 6281.8351947666],
    [0.00000000798, 2.62501051906, 12410.9751180321],
    [0.00000000817, 0.52083502825, 12416.8323203317],
    [0.00000000884, 0.84319899817, 22483.60475700909],
    [0.00000000755, 3.82941056281, 4060.97539791089],
    [0.00000000651, 3.93683821152, 17259.91083720689],
    [0.00000000616, 5.7047445182, 1596.43025976811],
    [0.00000000651, 2.41491885723, 1748.2602305505],
    [0.00000000723, 3.06743374106, 161000.92955515758],
    [0.00000000784, 0.87758060898, 4907.05823266209],
    [0.00000000784, 2.20169255256, 7234.5504387585],
    [0.00000000785, 3.43654258027, 846.3266522347],
    [0.00000000611, 1.53152362816, 853.4401992355],
    [0.00000000576, 1.2279826083, 12323.6669134923],
    [0.0000000057, 4.54665961586, 12587.1709129587],
    [0.00000000576, 3.06908128494, 13915.77529215809],
    [0.0000000077, 5.60311452827, 6069.53293706989],
    [0.00000000773, 0.21363273558, 6133.2688353733],
    [0.00000000581, 1.34025743471, 11933.6117781531],
    [0.00000000719, 0.90840576142, 15720.5949673949],
    [0.00000000578, 4.26997200274, 8662.48414104651],
    [0.00000000536, 6.06660590951, 18852.9944858067],
    [0.00000000633, 1.17258360285, 52176.0501006319],
    [0.00000000581, 2.92798889289, 5334.1440585051],
    [0.00000000532, 4.58762178742, 18842.3578204569],
    [0.00000000657, 3.25871870022, 5849.1202946311],
    [0.00000000599, 2.11793230261, 6151.7777057885],
    [0.0000000054, 3.24412649701, 6286.6060248927],
    [0.0000000054, 3.40440707563, 6280.0333100571],
    [0.00000000628, 0.31668062965, 17298.4261448097],
    [0.00000000532, 4.41105068397, 11514.1271342779],
    [0.00000000513, 3.70291605445, 12456.1891962469],
    [0.00000000649, 4.90568628758, 11764.5745863425],
    [0.00000000582, 4.53092429894, 6414.8616291613],
    [0.00000000517, 4.06133972007, 3340.36860921629],
    [0.00000000609, 3.94494306228, 10420.23010099111],
    [0.00000000615, 4.71270964329, 10983.94853421629],
    [0.00000000622, 5.53858241889, 5326.5428765373],
    [0.00000000536, 3.70224967645, 7232.49527644471],
    [0.00000000516, 2.92986975188, 433.9555553603],
    [0.00000000613, 1.79095811234, 10969.72144021469],
    [0.00000000583, 6.15311267171, 5863.3473886327],
    [0.00000000636, 6.06042539245, 26735.7014447297],
    [0.00000000665, 2.74682435671, 40879.1966871603],
    [0.00000000583, 2.82325235087, 12592.2062022991],
    [0.00000000479, 1.33548820034, 5547.4431539431],
    [0.00000000571, 2.58673571504, 6062.9070250361],
    [0.00000000565, 3.92092198777, 4171.1817191303],
    [0.00000000462, 1.96630641591, 3104.6862419403],
    [0.00000000551, 4.03874430699, 6503.7323099137],
    [0.00000000504, 5.14547341413, 15670.83794192309],
    [0.00000000535, 6.12277243019, 173567.0812551404],
    [0.0000000046, 3.18401450277, 3495.78900865049],
    [0.00000000449, 5.0983364913, 4274.27449334889],
    [0.00000000453, 3.57566005736, 9387.76209193169],
    [0.00000000527, 6.24827137997, 24602.8562523545],
    [0.00000000502, 0.97407216668, 12490.1294461907],
    [0.00000000603, 0.85487069842, 322711.54834139],
    [0.00000000532, 1.83659178149, 5120.8449630671],
    [0.0000000053, 0.4349120389, 18845.9482491087],
    [0.00000000431, 5.31145947559, 7019.19618100671],
    [0.00000000465, 5.8329898198, 8827.14645239129],
    [0.00000000559, 1.7156088001, 1582.2031657665],
    [0.00000000485, 6.13610027053, 29296.8592070621],
    [0.00000000584, 0.07138791653, 72850.8055327292],
    [0.0000000055, 3.95560592819, 213.0552779545],
    [0.00000000481, 1.86946119801, 14.47091148511],
    [0.00000000569, 2.95240683895, 97238.871361971],
    [0.00000000551, 1.64539130884, 14313.9242955663],
    [0.00000000389, 3.43047350256, 6245.1866318371],
    [0.00000000389, 3.21806007009, 6321.4527031127],
    [0.00000000388, 1.13963224225, 6297.5467614765],
    [0.00000000388, 5.5089013304, 6269.0925734733],
    [0.00000000515, 1.67075264819, 12320.56387123691],
    [0.00000000394, 6.10437801091, 4156.95462512869],
    [0.00000000491, 5.96788884074, 1479.11039154791],
    [0.0000000044, 0.97316688838, 5650.0482931947],
    [0.00000000382, 3.07660544855, 9917.9406919933],
    [0.00000000503, 4.65767245093, 17157.3056979553],
    [0.00000000439, 4.8256286915, 233141.55822184499],
    [0.00000000381, 2.02484381212, 14143.2514249471],
    [0.00000000371, 4.59067170554, 5643.4223811609],
    [0.00000000516, 5.6142440724, 135.30889751891],
    [0.00000000417, 3.74461559548, 13760.8425276909],
    [0.00000000483, 4.41750912984, 9779.3524936089],
    [0.00000000381, 4.36951119319, 14919.2616712381],
    [0.00000000378, 4.51952349691, 17267.5120191747],
    [0.00000000393, 1.56678612595, 7872.39256275871],
    [0.00000000376, 4.45581102621, 13517.62628874989],
    [0.00000000365, 2.11020607854, 6923.2169537889],
    [0.00000000371, 5.76233679446, 13625.7774476555],
    [0.00000000355, 5.24317955258, 10874.2298479639],
    [0.00000000499, 2.72562606986, 161710.8626037159],
    [0.00000000379, 0.8162159788, 3185.43584474911],
    [0.00000000471, 4.7829471194, 11712.71150074729],
    [0.00000000417, 3.3307359169, 22779.6810636773],
    [0.00000000485, 1.35444198321, 12528.26248182851],
    [0.00000000358, 3.49115357527, 6295.0490203109],
    [0.00000000358, 3.15737999738, 6271.5903146389],
    [0.00000000365, 3.62050447597, 6836.40143535029],
    [0.00000000351, 2.21887831196, 11617.21990849651],
    [0.00000000351, 2.96356670458, 205.9417309537],
    [0.00000000429, 0.79790217165, 3894.4256470257],
    [0.00000000388, 0.49080052992, 956.53297345411],
    [0.00000000464, 0.69464877419, 23581.5019948011],
    [0.00000000396, 2.35908361907, 5231.0512842865],
    [0.00000000421, 4.8273944432, 7445.7943718827],
    [0.00000000366, 0.62612486089, 17253.2849251731],
    [0.0000000036, 0.81896878015, 21393.7857873411],
    [0.00000000336, 1.4133066775, 6279.3875142118],
    [0.00000000336, 5.23522689515, 6287.251820738],
    [0.00000000326, 4.93781139708, 1059.1381127057],
    [0.00000000395, 0.53943839302, 5642.4420600927],
    [0.0000000045, 0.23150267191, 1385.3177574676],
    [0.00000000363, 4.29615345291, 22484.0923919761],
    [0.00000000399, 0.80548840004, 16858.7263504167],
    [0.00000000316, 4.03075171777, 20995.6367839329],
    [0.0000000043, 2.39021484637, 19650.8046636145],
    [0.00000000363, 4.29069778349, 7335.5880506633],
    [0.00000000317, 1.52889301942, 11769.6098756829],
    [0.00000000395, 5.39427984473, 5905.94605955911],
    [0.00000000324, 3.70774573147, 37.7838551523],
    [0.00000000299, 3.86306301151, 641.12142486571],
    [0.00000000304, 0.15985948407, 5750.1055840313],
    [0.00000000298, 3.82763680613, 1350.1112271423],
    [0.00000000414, 4.17890604161, 44809.4063833799],
    [0.00000000339, 4.29176984719, 3.6883357796],
    [0.00000000351, 5.93395494462, 12345.9828750275],
    [0.00000000362, 0.42214982034, 21953.91379191449],
    [0.00000000304, 4.93815385347, 29826.5501721567],
    [0.00000000395, 0.0772197183, 4176.2851599325],
    [0.0000000032, 2.49901226571, 10818.3791043993],
    [0.00000000384, 4.01872268681, 10177.01386205009],
    [0.00000000279, 0.96409855547, 10970.2090751817],
    [0.00000000365, 1.25425361388, 6660.6932753907],
    [0.00000000377, 0.82514906124, 29864.5778447925],
    [0.00000000275, 5.73507538514, 20597.4877805247],
    [0.00000000316, 2.59688143484, 316.6356871401],
    [0.00000000339, 6.10829032638, 6924.1972748571],
    [0.00000000386, 2.29032835664, 2636.9692901205],
    [0.00000000273, 1.09519308783, 26709.8907598969],
    [0.00000000314, 1.47223989608, 14945.5599910379],
    [0.00000000281, 4.86653427016, 16858.23871544969],
    [0.00000000287, 3.30150277561, 18073.46112116669],
    [0.00000000265, 5.11010310272, 19379.1623325523],
    [0.00000000325, 2.49278036693, 12360.2099690291],
    [0.00000000362, 1.18157001338, 30665.9111409493],
    [0.00000000269, 0.20537228942, 6816.53375091851],
    [0.00000000344, 3.51559724211, 6147.69434246491],
    [0.00000000255, 4.94623609008, 1376.0176173293],
    [0.00000000334, 3.1330312426, 6418.9449924849],
    [0.00000000316, 5.54205330844, 6055.8435346859],
    [0.00000000283, 4.23095234926, 28287.2343023447],
    [0.00000000305, 4.26252488384, 16522.4158985187],
    [0.0000000027, 0.0521586717, 283.6155013817],
    [0.00000000243, 2.54680473739, 6255.9181113781],
    [0.00000000243, 4.10172883526, 6310.7212235717],
    [0.00000000296, 0.07899510796, 6129.5408569901],
    [0.00000000301, 1.10648037942, 6510.7958002639],
    [0.00000000329, 1.15683223901, 377.6174253993],
    [0.00000000267, 3.4201150532, 24705.9490265731],
    [0.00000000285, 2.50494570372, 5469.7693835151],
    [0.00000000286, 0.28647364691, 6437.0984779597],
    [0.00000000311, 3.21063889136, 11720.3126827151],
    [0.00000000319, 4.71059907821, 169379.5000286584],
    [0.00000000241, 2.9943933077, 632.5399218297],
    [0.00000000229, 1.01522459538, 1265.81129610991],
    [0.00000000235, 3.36978882786, 4487.57358878689],
    [0.00000000253, 0.51356087882, 4377.3672675675],
    [0.00000000277, 1.58719268637, 419.2408263917],
    [0.00000000234, 5.1257458531, 11713.1991357143],
    [0.00000000216, 5.01445941939, 10454.25756912169],
    [0.00000000241, 5.44670796756, 103.3365917021],
    [0.00000000214, 2.09481715597, 2222.1004520805],
    [0.00000000213, 3.79438383373, 30356.2411372513],
    [0.0000000024, 2.57405501441, 6309.1303523077],
    [0.00000000212, 2.36637350989, 262.84010588929],
    [0.00000000259, 3.2172597467, 6283.56348495841],
    [0.00000000259, 3.43127382595, 6283.0758499914],
    [0.00000000222, 1.42789121927, 10440.03047512009],
    [0.00000000201, 5.11101601554, 5746.0275204125],
    [0.00000000274, 3.8538726179, 23581.0143598341],
    [0.00000000243, 4.14346519403, 7096.8699514347],
    [0.00000000234, 5.23697266935, 5573.3866189166],
    [0.00000000203, 0.00533428175, 16460.08971204149],
    [0.00000000246, 5.8365437948, 8672.21368792411],
    [0.00000000216, 4.93054195434, 5437.23683272371],
    [0.0000000021, 5.8249897147, 9381.2034902007],
    [0.00000000199, 0.93528415346, 11216.5281078075],
    [0.0000000027, 0.40019527935, 284.1031363487],
    [0.00000000207, 3.06628694399, 12562.80508881451],
    [0.00000000212, 1.7547160672, 7129.4025022261],
    [0.00000000269, 1.5266896007, 70755.31090921978],
    [0.00000000221, 3.40184768346, 77713.52765063698],
    [0.00000000225, 4.01628844723, 5635.8211991931],
    [0.00000000197, 3.36122016267, 14712.07329897449],
    [0.00000000192, 2.04581063866, 17272.1278250099],
    [0.00000000241, 5.09422826, 15907.0079441661],
    [0.00000000261, 5.60213035381, 48739.6160795995],
    [0.00000000255, 0.53150571182, 6206.5659612323],
    [0.00000000256, 2.30148639986, 224.5886131854],
    [0.00000000182, 4.41917983264, 18848.98373249069],
    [0.0000000025, 4.24183231344, 5934.39524702691],
    [0.00000000196, 2.21911266897, 16460.5773470085],
    [0.00000000187, 4.75761261391, 22003.6708173863],
    [0.00000000229, 0.16732487654, 2942.21960580809],
    [0.00000000175, 5.41173900219, 11614.6771112157],
    [0.00000000187, 5.47425531847, 9778.8648586419],
    [0.00000000175, 4.58223305763, 3744.5835282543],
    [0.00000000241, 0.28794939753, 8390.3541750173],
    [0.00000000236, 2.0248530345, 1.7282901918],
    [0.00000000217, 5.02460023035, 17996.2749857057],
    [0.00000000173, 1.08399000143, 6275.71848550709],
    [0.00000000191, 6.27756282518, 394.86970254271],
    [0.00000000231, 2.60472823534, 34596.1208371689],
    [0.00000000169, 5.11378923747, 6438.2524319421],
    [0.00000000235, 3.4739610148, 17256.38771885789],
    [0.00000000188, 5.5966291544, 401.91593924071],
    [0.00000000217, 4.97442863783, 10984.4361691833],
    [0.0000000023, 2.40692408305, 6632.2440879229],
    [0.00000000208, 0.72059454942, 11087.5289434019],
    [0.00000000165, 2.37182548424, 743.23387801611],
    [0.00000000177, 4.7306797582, 4796.85191144269],
    [0.00000000208, 4.59043597135, 3097.64000524229],
    [0.00000000167, 3.97387947664, 5714.4977934475],
    [0.00000000198, 3.26732644351, 5539.8419719753],
    [0.00000000169, 3.73983013574, 12132.6837795895],
    [0.00000000214, 4.34216809137, 24492.6499311351],
    [0.00000000172, 1.25880044898, 6233.5626420031],
    [0.00000000172, 5.38973312367, 6333.0766929467],
    [0.00000000223, 4.9999084706, 266.85085920531],
    [0.00000000159, 3.90246086071, 13199.1792567795],
    [0.00000000219, 5.40805183208, 10344.05124790229],
    [0.00000000207, 3.49598218672, 12569.9859461181],
    [0.00000000176, 4.05199209274, 12012.8261146239],
    [0.0000000017, 6.0103953944, 6294.36536773881],
    [0.0000000017, 0.63813817825, 6272.273967211],
    [0.00000000205, 5.87166506948, 13119.47728534169],
    [0.00000000167, 5.5438552664, 17686.9966630499],
    [0.0000000021, 0.88175440791, 13521.50762410789],
    [0.00000000163, 1.4679623187, 802.0647486073],
    [0.00000000159, 4.85018558111, 5017.2645538815],
    [0.00000000148, 0.75075299347, 419.72846135871],
    [0.00000000165, 0.87966880312, 20199.3387771165],
    [0.00000000196, 3.57999903444, 33326.33491569069],
    [0.00000000146, 0.39484750798, 19800.7021387413],
    [0.00000000148, 2.67465416652, 6852.1415415023],
    [0.00000000146, 0.23882077577, 17370.6047933933],
    [0.00000000143, 0.85202349514, 5618.5636223449],
    [0.00000000142, 5.37141800193, 17654.5367222661],
    [0.0000000014, 1.22241558577, 2008.8013566425],
    [0.00000000153, 1.79747194391, 5436.7491977567],
    [0.00000000162, 3.70215026876, 775.2787938405],
    [0.00000000162, 4.78754155685, 12552.1684234647],
    [0.00000000143, 2.32218951292, 5010.1510068807],
    [0.00000000188, 3.68702080121, 28.6930049513],
    [0.00000000155, 6.15650399253, 11610.1063614957],
    [0.00000000174, 5.71964679538, 20452.6255947383],
    [0.00000000179, 5.30407615411, 27511.2240560537],
    [0.00000000135, 0.07815962516, 12431.3304374309],
    [0.00000000164, 5.60920106543, 28767.1682419675],
    [0.00000000134, 5.44099179137, 16840.9138282987],
    [0.00000000174, 4.27755511799, 19805.0711090663],
    [0.00000000146, 1.55848605346, 12701.4605975017],
    [0.00000000137, 2.60101256262, 11.2895177474],
    [0.00000000167, 1.27059509188, 17473.6975676119],
    [0.00000000152, 4.19104806587, 16627.6147328607],
    [0.00000000124, 5.79651030598, 6948.0757126049],
    [0.00000000135, 3.38729000615, 3531.2844328163],
    [0.00000000172, 4.942614472, 167959.1462965748],
    [0.00000000123, 5.21069118841, 23013.29572210369],
    [0.00000000122, 5.69263982892, 3583.5848481573],
    [0.0000000017, 1.45223428169, 333857.8339442562],
    [0.00000000155, 4.05745332726, 6058.48723680599],
    [0.0000000012, 1.1914090758, 12809.12412144031],
    [0.00000000141, 5.52535299558, 162420.7956522742],
    [0.0000000012, 5.84076902832, 12528.3678448305],
    [0.00000000123, 6.20892018031, 25933.8805136059],
    [0.00000000144, 2.13726910032, 95.7354097343],
    [0.00000000165, 0.74320909184, 52669.8257758191],
    [0.00000000119, 1.19695838858, 19247.6203708659],
    [0.00000000117, 0.73795876397, 11610.7957758577],
    [0.00000000163, 3.11536370558, 661.4767442645],
    [0.00000000163, 4.35849093916, 9929.6700448293],
    [0.00000000119, 4.28708216617, 12250.0036478097],
    [0.00000000145, 3.90603326867, 6205.6458970469],
    [0.00000000145, 2.74250030398, 6360.99343790291],
    [0.00000000159, 4.18513637906, 228278.3484689702],
    [0.00000000114, 1.84089435963, 19402.55313533309],
    [0.00000000147, 4.06094470975, 38526.3305333885],
    [0.00000000156, 2.57788751226, 4307.8271216189],
    [0.00000000131, 1.7066799759, 21228.63584102931],
    [0.00000000118, 5.40927777429, 6263.64990657511],
    [0.00000000118, 1.23925579836, 6302.9894283747],
    [0.00000000137, 2.54415078163, 6315.8522182663],
    [0.00000000137, 4.10438279102, 6250.7871166835],
    [0.00000000109, 2.76724250809, 11925.5179100841],
    [0.00000000111, 4.37410999057, 6226.4212925393],
    [0.00000000111, 2.27442358208, 6340.2180424105],
    [0.00000000123, 2.37617280556, 24734.3982140409],
    [0.00000000107, 2.16622176546, 12463.30274324771],
    [0.00000000133, 3.03066152119, 18875.76968725751],
    [0.00000000123, 5.64258939044, 6260.5444660241],
    [0.00000000123, 1.00594418221, 6306.09486892571],
    [0.00000000113, 1.95402250286, 2111.8941308611],
    [0.00000000131, 3.61193663544, 18415.7596295809],
    [0.0000000011, 1.76186229885, 6289.94822637491],
    [0.0000000011, 4.8866712738, 6276.69110857489],
    [0.00000000103, 3.890438054, 6241.7688764901],
    [0.00000000103, 2.75809551865, 6324.8704584597],
    [0.00000000113, 2.20489389956, 3496.2766436175],
    [0.00000000103, 4.57936207476, 10344.5388828693],
    [0.00000000115, 2.668760799, 24336.2492106327],
    [0.00000000107, 1.7202750438, 83974.0791732134],
    [0.00000000107, 2.7588262647, 84020.1030979774],
    [0.00000000106, 3.27680652019, 12772.58106590351],
    [0.00000000143, 1.51224865614, 2069.2506523901],
    [0.00000000143, 0.91984229557, 18773.2052961821],
    [0.00000000115, 3.78326005147, 3641.4907540357],
    [0.00000000112, 5.73842498855, 11499.41240530929],
    [0.00000000099, 1.79019915134, 11190.6217176205],
    [0.00000000126, 1.19294266238, 18823.1730476579],
    [0.00000000115, 4.66544469064, 12570.3276707294],
    [0.000000001, 3.52903073097, 16062.4283436003],
    [0.00000000107, 4.02566335272, 5216.8241902849],
    [0.0000000012, 4.96595619835, 9814.36028280769],
    [0.00000000138, 4.55918305844, 6210.0225416159],
    [0.00000000138, 2.08935051421, 6356.6167933339],
    [0.00000000105, 1.0335172481, 12721.32828193349],
    [0.00000000135, 0.57056498904, 18699.9081703231],
    [0.00000000104, 2.15061044327, 12560.8725931589],
    [0.00000000098, 5.57514638218, 5815.3546771205],
    [0.00000000111, 3.97355954616, 10239.3400485273],
    [0.000000001, 4.55824596261, 263.3277408563],
    [0.00000000095, 1.74741902247, 155.6642169177],
    [0.0000000013, 2.12273849218, 27511.7116910207],
    [0.0000000012, 0.27869701115, 31441.4337522733],
    [0.00000000114, 3.75372093481, 6155.3008241375],
    [0.00000000114, 2.89481263784, 6411.3385108123],
    [0.00000000119, 5.21922596573, 951.9622237341],
    [0.00000000117, 1.90078630587, 28236.98964190589],
    [0.00000000107, 1.90914871846, 21.0192129759],
    [0.00000000095, 5.6330799185, 11300.8280388399],
    [0.0000000011, 2.79120257993, 6312.74917601091],
    [0.0000000011, 3.85733099272, 6253.8901589389],
    [0.00000000097, 4.22068998833, 78263.95324220609],
    [0.00000000095, 5.98375623165, 23938.1002072245],
    [0.00000000091, 2.99457476326, 12829.4794408391],
    [0.00000000112, 4.31165167302, 16737.8210540801],
    [0.00000000126, 3.10862438843, 3.2793008655],
    [0.000000001, 3.03286435761, 6133.7564703403],
    [0.00000000127, 5.41503454763, 1293.24040609909],
    [0.00000000119, 5.99165259734, 17893.1822114871],
    [0.00000000089, 1.33458093593, 23539.9512038163],
    [0.00000000126, 0.25750692887, 311565.2627385237],
    [0.00000000093, 5.67599033319, 736.1203310153],
    [0.0000000012, 2.08797711521, 14158.9915310991],
    [0.00000000118, 1.43212365415, 16061.94070863329],
    [0.00000000099, 3.61958161583, 6432.8828646095],
    [0.00000000095, 5.99715593195, 2699.49100183409],
    [0.00000000089, 2.30094279014, 15671.3255768901],
    [0.00000000124, 0.48008010598, 178430.2910080152],
    [0.00000000089, 1.07338684504, 6751.28465782931],
    [0.00000000096, 2.64494034094, 7349.81514466491],
    [0.00000000096, 0.74221743876, 24066.0517402591],
    [0.00000000103, 4.37747381017, 18202.4605341429],
    [0.00000000099, 6.06683620849, 6252.40554183991],
    [0.00000000099, 0.58169736416, 6314.2337931099],
    [0.0000000009, 0.38965345976, 58864.30010066279],
    [0.00000000086, 0.5983114156, 9380.71585523369],
    [0.00000000086, 0.93909542206, 10557.35034334029],
    [0.00000000098, 3.41472072058, 6439.7203879773],
    [0.00000000098, 3.23381285207, 6126.91894697251],
    [0.00000000086, 1.34148300572, 23123.9896782901],
    [0.00000000118, 3.7384435938, 13951.9570924174],
    [0.00000000117, 4.10902635534, 89570.23393702849],
    [0.00000000083, 3.1413364551, 8858.0711268371],
    [0.00000000092, 4.01226998426, 12342.0507217644],
    [0.00000000085, 2.29415888429, 5017.7521888485],
    [0.00000000101, 0.23020335948, 18429.9867235825],
    [0.00000000088, 3.76744436736, 17054.2129237367],
    [0.00000000113, 2.05049922518, 12985.88016134151],
    [0.00000000083, 0.90577628609, 20597.0001455577],
    [0.00000000082, 0.19375496576, 5483.4985423095],
    [0.00000000087, 0.10696172464, 21424.2228268199],
    [0.00000000107, 2.21757059467, 522.3336006103],
    [0.00000000084, 2.41107951633, 6187.3404402571],
    [0.00000000084, 4.23745405632, 6379.2988946927],
    [0.00000000107, 0.88149755532, 24382.8352909579],
    [0.00000000082, 0.94957627406, 8983.0544867925],
    [0.00000000105, 3.87374571694, 6131.4223863897],
    [0.00000000105, 2.77478785571, 6435.2169485601],
    [0.00000000114, 4.07080782247, 8258.81221333091],
    [0.00000000082, 3.82951941927, 3957.8826236923],
    [0.00000000112, 2.7088859404, 3738.51761262449],
    [0.00000000102, 2.89783593458, 5767.8557963819],
    [0.00000000102, 3.75069763806, 6798.7835385679],
    [0.00000000092, 1.35671084183, 18216.6876281445],
    [0.00000000083, 1.35246903804, 29864.0902098255],
    [0.00000000112, 5.48905138227, 12189.0219095505],
    [0.0000000008, 3.59069348639, 24080.2788342607],
    [0.0000000008, 4.80792276932, 15141.14697682849],
    [0.00000000088, 3.00407783628, 1573.57660661529],
    [0.00000000081, 3.72088724498, 1550.8014051645],
    [0.00000000092, 4.36458397294, 101426.452588453],
    [0.0000000011, 0.37007007331, 78423.9483341623],
    [0.00000000087, 2.32197271603, 1580.6228433133],
    [0.00000000085, 6.14240130116, 27043.2590656993],
    [0.00000000078, 1.45118645187, 6812.5229976025],
    [0.0000000008, 3.36946826019, 6081.06627230081],
    [0.0000000008, 3.27906531246, 6485.573062649],
    [0.00000000079, 4.53816488559, 36109.6260221481],
    [0.00000000088, 0.87069012239, 16944.0066025173],
    [0.00000000081, 1.41865192078, 5.2791068239],
    [0.00000000093, 5.85619230131, 16737.33341911309],
    [0.00000000088, 3.2490126448, 12537.9463299985],
    [0.00000000096, 5.19394745813, 20198.85114214949],
    [0.00000000106, 2.16665694222, 56600.0354720387],
    [0.00000000097, 0.14089796919, 6040.10342853389],
    [0.00000000081, 3.62140277149, 3956.2641985359],
    [0.00000000077, 1.39348893935, 40796.5827401577],
    [0.00000000076, 2.20964866296, 22743.16556203289],
    [0.00000000098, 5.48885750823, 42456.5402296081],
    [0.00000000083, 2.20640709608, 19801.1897737083],
    [0.00000000079, 4.50777033878, 5622.08674069391],
    [0.00000000096, 1.98497858569, 5888.6937824157],
    [0.00000000096, 4.66355498696, 6677.9455525341],
    [0.00000000075, 6.24025577336, 41194.7317435659],
    [0.00000000074, 0.66729085356, 6261.9840270079],
    [0.00000000074, 5.98124271908, 6304.6553079419],
    [0.00000000073, 4.02724017625, 5870.9485706005],
    [0.00000000073, 2.6212933964, 6695.6907643493],
    [0.00000000085, 3.65241534932, 12850.2548363315],
    [0.00000000072, 0.04178130909, 6253.4982293261],
    [0.00000000072, 0.32356695638, 6313.14110562371],
    [0.000000001, 5.37794526764, 5316.3487900393],
    [0.00000000085, 2.90983978106, 12282.5361986011],
    [0.00000000075, 1.96590105616, 24422.6141688908],
    [0.00000000076, 1.98227687206, 63659.1215683211],
    [0.00000000072, 0.25938390676, 16723.5939600785],
    [0.00000000097, 4.92418361725, 17995.78735073869],
    [0.00000000087, 3.63417247018, 18106.4813069251],
    [0.0000000008, 5.17587638062, 17363.4912463925],
    [0.0000000007, 4.63132769081, 6124.37614969171],
    [0.0000000007, 2.01720588184, 6442.2631852581],
    [0.0000000007, 2.85493203288, 4705.4884900601],
    [0.00000000078, 4.94849285823, 23550.5878691661],
    [0.0000000007, 2.27501820444, 12036.21691740469],
    [0.00000000077, 3.43499900992, 5237.67719632029],
    [0.00000000069, 6.02127545231, 16207.64245401849],
    [0.00000000082, 5.48703292615, 6774.98295993371],
    [0.00000000067, 0.17045217443, 7083.14079264031],
    [0.00000000067, 1.83540783927, 6394.50630976251],
    [0.00000000067, 4.81312573338, 6172.1330251873],
    [0.00000000077, 4.99636632687, 9924.5666040271],
    [0.0000000008, 5.36758481138, 22380.9996177575],
    [0.0000000007, 4.6017469201, 6390.9831914135],
    [0.0000000007, 2.04678665255, 6175.6561435363],
    [0.00000000074, 2.55353968467, 16193.41536001689],
    [0.00000000076, 5.64799287134, 32217.4439985643],
    [0.00000000091, 2.47526506655, 6653.0194834153],
    [0.00000000091, 4.1732685061, 5913.6198515345],
    [0.00000000067, 0.23293815799, 6265.50714535691],
    [0.00000000067, 0.13241010748, 6301.1321895929],
    [0.00000000067, 1.44106493302, 5959.3266158505],
    [0.00000000083, 2.94569161083, 16723.10632511149],
    [0.0000000008, 0.77941152413, 23646.5670963839],
    [0.00000000068, 3.64312239532, 4897.4243911387],
    [0.00000000069, 2.14076318935, 6944.5525942559],
    [0.00000000089, 1.999807432, 10660.44311755889],
    [0.00000000079, 1.67507258686, 35371.6434484929],
    [0.00000000073, 2.11438932219, 6370.62787201471],
    [0.00000000073, 4.53414425046, 6196.0114629351],
    [0.00000000065, 3.66592557921, 22345.0165586247],
    [0.00000000064, 4.23436375372, 15265.64270181689],
    [0.00000000066, 2.69579215047, 6315.2919732917],
    [0.00000000066, 3.95274142218, 6251.34736165811],
    [0.00000000065, 5.01328627787, 323.74923414091],
    [0.00000000076, 6.17321822941, 10873.74221299689],
    [0.00000000084, 5.21213167261, 109.9625037359],
    [0.00000000063, 4.27995662426, 11823.4054569337],
    [0.00000000064, 0.09093186873, 28774.2817889683],
    [0.00000000072, 0.54185576116, 18099.7594409665],
    [0.00000000066, 2.78134607936, 17576.7903418305],
    [0.00000000072, 1.59783352501, 245707.7099218278],
    [0.00000000061, 5.48721212671, 10557.8379783073],
    [0.00000000064, 0.75473231286, 71430.9394356126],
    [0.00000000068, 2.90814349886, 28760.05469496669],
    [0.00000000062, 0.67966569221, 3854.7898494737],
    [0.00000000073, 6.18332621846, 23440.3815479467],
    [0.0000000006, 3.22950754418, 13088.9729355601],
    [0.00000000078, 4.56094059497, 12564.91104475801],
    [0.0000000006, 4.47214922427, 7548.8871461013],
    [0.00000000059, 2.55184049976, 6286.3551508569],
    [0.00000000075, 4.42124944201, 18625.1265717558],
    [0.00000000058, 0.47683719349, 35050.2440919589],
    [0.0000000006, 0.20507190989, 553.8132203259],
    [0.00000000069, 5.82409350668, 167993.9384537073],
    [0.00000000059, 0.42390666617, 41991.0297503823],
    [0.00000000062, 2.87556762555, 15663.79170522509],
    [0.00000000081, 1.27058846781, 7250.29054491051],
    [0.00000000059, 2.68580345393, 6277.2537518451],
    [0.00000000059, 3.96273011871, 6289.3855831047],
    [0.00000000063, 2.13380171799, 18003.38853270651],
    [0.00000000057, 4.87646676285, 793.0187059509],
    [0.00000000057, 0.02714811761, 10027.65937824569],
    [0.0000000006, 2.20528431296, 647.25465079831],
    [0.00000000072, 4.16486482248, 4597.77991000629],
    [0.00000000059, 3.82312915284, 6279.30891415889],
    [0.00000000068, 2.71579349818, 3166.66025521511],
    [0.00000000056, 4.67855976016, 6226.5164053051],
    [0.00000000056, 1.96997381249, 6340.12292964471],
    [0.00000000056, 2.52728721608, 12303.3115940935],
    [0.00000000057, 3.09052199581, 5864.3952685743],
    [0.00000000057, 3.55801157684, 6702.2440663755],
    [0.00000000069, 1.90302432953, 23536.3607751645],
    [0.00000000059, 0.79584524101, 5760.25461441409],
    [0.00000000065, 0.39208551086, 12139.30969162329],
    [0.00000000059, 3.3850318073, 67589.3312645407],
    [0.00000000073, 0.51774809611, 11079.92776143409],
    [0.00000000076, 2.34882980338, 23227.0824525087],
    [0.00000000067, 2.11713130342, 4804.4530934105],
    [0.00000000073, 6.00949211634, 30349.1275902505],
    [0.00000000074, 4.74855693255, 92747.9329843061],
    [0.0000000007, 1.56579326622, 12299.7884757445],
    [0.0000000006, 0.37222072501, 12171.7696324071],
    [0.00000000059, 2.60537764043, 15.49628866851],
    [0.00000000074, 5.912073328, 3684.1342325067],
    [0.00000000058, 3.15618940951, 6717.0314053517],
    [0.00000000053, 2.11594966811, 26087.65932409069],
    [0.00000000059, 1.05069506955, 12164.7233957091],
    [0.00000000063, 3.66132366701, 5219.5179490556],
    [0.00000000056, 4.02457482788, 3178.38960805111],
    [0.00000000063, 0.59069175384, 5227.38225558179],
    [0.0000000007, 3.26289105386, 19004.4041319249],
    [0.00000000072, 1.0551604213, 4583.55281600469],
    [0.00000000052, 5.6776348074, 3627.2636600341],
    [0.00000000052, 4.87358219235, 6411.2712005095],
    [0.00000000052, 1.7749513803, 6155.3681344403],
    [0.00000000054, 3.61747287023, 5849.6079295981],
    [0.00000000066, 4.36702417592, 5791.16874004909],
    [0.00000000066, 1.22543152233, 5791.6563750161],
    [0.00000000051, 0.84172627776, 5113.2437810993],
    [0.00000000058, 4.29307138428, 30775.7257811265],
    [0.00000000061, 5.44071514919, 14169.5497447469],
    [0.00000000054, 4.73181482869, 10454.74520408871],
    [0.00000000056, 2.77114790322, 23141.8022004081],
    [0.00000000067, 2.31997560907, 28313.0449871775],
    [0.00000000056, 1.94933767144, 5244.2930566845],
    [0.00000000062, 2.18007483018, 5657.6494751625],
    [0.00000000062, 4.46845874247, 6908.9898597873],
    [0.0000000005, 1.53914825533, 2574.99527684569],
    [0.0000000005, 1.32272515661, 536.5606946119],
    [0.0000000005, 1.95397557344, 6684.9917892321],
    [0.0000000005, 4.69455799921, 5881.6475457177],
    [0.00000000049, 5.07674655291, 16310.73522823709],
    [0.00000000049, 5.07674655291, 16311.2228632041],
    [0.00000000065, 0.63077087865, 46386.7499258277],
    [0.00000000069, 3.59016732594, 60530.2451682583],
    [0.00000000068, 6.19031950148, 96678.14268052569],
    [0.00000000049, 2.44170258748, 12323.17927852529],
    [0.0000000005, 3.95175048363, 21954.4014268815],
    [0.00000000049, 0.2698739409, 4164.5558070965],
    [0.00000000059, 2.11910349639, 33794.7875410121],
    [0.0000000005, 3.21674377716, 43739.0461634493],
    [0.00000000059, 4.28455887932, 3981.73385156551],
    [0.00000000058, 1.59500717257, 27707.29867681129],
    [0.00000000051, 3.00541030027, 7669.21494381111],
    [0.00000000048, 4.80655958998, 3646.59419483791],
    [0.00000000065, 3.2087004671, 82534.6474380951],
    [0.00000000056, 4.19440679704, 800.06494264891],
    [0.00000000057, 0.99121344005, 11609.61872652869],
    [0.00000000048, 5.23363777755, 26.5421372833],
    [0.00000000047, 1.10988199958, 30640.1004561165],
    [0.0000000006, 1.97427905695, 8982.5668518255],
    [0.00000000049, 3.72444308522, 96563.24283557819],
    [0.0000000005, 5.17708029533, 17583.9038888313],
    [0.00000000046, 2.75949485809, 23539.46356884929],
    [0.00000000048, 2.83397317642, 170.4290531357],
    [0.00000000055, 4.7776401571, 735.6326960483],
    [0.00000000054, 4.33153690679, 6680.98103591609],
    [0.0000000006, 1.72047044215, 44033.8837720559],
    [0.00000000064, 4.40652103235, 80181.29364935629],
    [0.00000000059, 5.1803876551, 24279.3508356971],
    [0.00000000049, 5.16566622453, 5490.5447790075],
    [0.00000000058, 1.2407534903, 6490.0204047715],
    [0.00000000058, 5.40778008235, 6076.6189301783],
    [0.00000000046, 6.066999513, 18208.1061251085],
    [0.00000000045, 1.62616739636, 4480.46004178609],
    [0.00000000055, 3.56883579861, 16097.9237677661],
    [0.00000000055, 0.42724314502, 16097.43613279909],
    [0.00000000061, 5.1042759464, 491.9071099423],
    [0.00000000054, 2.79730041476, 6006.5738956105],
    [0.00000000054, 3.85123315789, 6560.0654393393],
    [0.00000000044, 3.20288072834, 5333.65642353809],
    [0.00000000052, 5.42298629738, 244287.8438247112],
    [0.00000000044, 1.12093494405, 2301.34199842589],
    [0.00000000045, 2.78871592108, 33794.2999060451],
    [0.00000000046, 2.27794751316, 4384.48081456829],
    [0.00000000048, 6.20709507263, 35579.9350570535],
    [0.00000000051, 0.20647678216, 18326.8939493639],
    [0.00000000045, 4.21002666289, 533.45790092711],
    [0.00000000046, 4.72419290173, 16703.3059509825],
    [0.00000000047, 0.82323755553, 5209.2230083171],
    [0.00000000051, 2.88192111957, 38650.4173236825],
    [0.00000000046, 4.04752097938, 12555.3498172024],
    [0.00000000052, 6.21526623133, 5992.3468016089],
    [0.00000000052, 0.43326734132, 6574.2925333409],
    [0.00000000044, 5.37917268925, 69942.1974183125],
    [0.00000000049, 5.19212576524, 12146.9108735911],
    [0.00000000053, 3.1037291002, 39301.8531447125],
    [0.00000000045, 6.22187415, 46360.9392409949],
    [0.00000000043, 3.11607958976, 8402.0835278533],
    [0.00000000043, 1.76871622593, 44137.1951668575],
    [0.00000000049, 1.97645700808, 22029.9691371861],
    [0.00000000044, 3.04557845219, 31441.92138724031],
    [0.00000000042, 1.28858480303, 9225.29545579949],
    [0.00000000045, 4.79112566977, 71519.54096076029],
    [0.00000000051, 4.52703512787, 7762.1862415393],
    [0.00000000041, 0.43156198612, 3735.48212924251],
    [0.00000000057, 2.81178684757, 40398.4337367495],
    [0.00000000047, 4.46091937774, 4707.9862312257],
    [0.00000000056, 0.65497165024, 28664.0754677489],
    [0.0000000005, 4.15809563419, 11919.3846841515],
    [0.00000000047, 0.89798744348, 316428.47249139857],
    [0.00000000041, 4.27548568888, 27278.7126339243],
    [0.00000000056, 2.85120735939, 83659.5206898825],
    [0.00000000048, 2.50261741205, 12662.3747446841],
    [0.00000000054, 0.83831240155, 16627.12709789369],
    [0.00000000052, 4.41165168727, 12571.9184417737],
    [0.00000000043, 4.69793524808, 7322.34627826531],
    [0.00000000041, 3.56154893542, 664.99986261351],
    [0.00000000042, 1.54738888492, 5641.9544251257],
    [0.00000000044, 1.44765859641, 6425.4982945111],
    [0.00000000044, 5.20087497624, 6141.1410404387],
    [0.00000000039, 0.38205897719, 22594.2987131955],
    [0.0000000004, 5.88641926833, 20894.53186172529],
    [0.00000000044, 5.28307931868, 5540.3296069423],
    [0.0000000005, 5.69294803866, 17782.48825530069],
    [0.00000000054, 4.69164296803, 6006.2846737335],
    [0.00000000054, 1.95689060462, 6560.3546612163],
    [0.00000000045, 5.54499872381, 142861.1474187747],
    [0.00000000047, 1.12158335918, 24499.7634781359],
    [0.00000000043, 1.36615498859, 7026.3097280075],
    [0.00000000047, 1.95434456607, 955.8435590921],
    [0.00000000047, 4.50829221159, 24485.5363841343],
    [0.0000000004, 2.60727518415, 9388.2497268987],
    [0.00000000043, 5.81439105801, 6359.5857387505],
    [0.00000000042, 3.96208965107, 8635.69818627969],
    [0.00000000051, 2.46325624829, 27831.79440179969],
    [0.00000000042, 1.94770311943, 6334.60000533731],
    [0.00000000042, 4.70083045322, 6232.03932961249],
    [0.00000000052, 3.53311914292, 11905.1625906853],
    [0.0000000004, 1.5094815182, 7076.0945559423],
    [0.0000000004, 0.29378456988, 5444.3503797245],
    [0.0000000004, 0.07156369559, 7122.2889552253],
    [0.00000000038, 2.24525725009, 44933.4931736739],
    [0.00000000037, 0.27418012894, 5715.6010297445],
    [0.00000000037, 0.09116813653, 6851.0383052053],
    [0.00000000042, 0.79913949254, 36147.6536947839],
    [0.00000000042, 2.85822305358, 6238.1784478383],
    [0.00000000042, 3.79031051907, 6328.4608871115],
    [0.0000000004, 3.6434787266, 3214.8925631597],
    [0.00000000043, 0.65521409425, 23141.3145654411],
    [0.00000000041, 3.95515629208, 19804.5834740993],
    [0.00000000038, 2.90982798521, 20.11150191529],
    [0.0000000005, 1.62788860301, 84334.66158130829],
    [0.0000000005, 2.84763289309, 60284.16619777939],
];

const X1: &[Term] = &[
    [0.00154550744, 0.64605836878, 0.2438174835],
    [0.00051503383, 6.00263199393, 12566.3955174663],
    [0.00001290763, 5.95941652859, 18849.4713674577],
    [0.00000702576, 1.75347943445, 6283.3196674749],
    [0.00000430422, 2.45216492471, 6282.83203250789],
    [0.00000212689, 1.73380190045, 6279.7965491259],
    [0.00000212524, 4.91484799365, 6286.84278582391],
    [0.00000062308, 0.3619329771, 4705.9761250271],
    [0.00000059808, 3.81187956678, 6257.0213476751],
    [0.00000059474, 2.83659652893, 6309.61798727471],
    [0.00000048914, 5.21332670904, 775.7664288075],
    [0.00000042814, 0.43864033644, 1059.6257476727],
    [0.00000046457, 0.01089905463, 7860.6632099227],
    [0.00000036653, 2.19635713914, 5753.6287023803],
    [0.00000035649, 1.44752011203, 5885.1706640667],
    [0.00000035362, 4.47215447256, 6813.0106325695],
    [0.00000032151, 5.19677261546, 6681.46867088311],
    [0.00000028763, 5.91618988907, 25132.5472174491],
    [0.00000028447, 1.14976229491, 6127.8992680407],
    [0.00000027537, 5.49920443604, 6438.7400669091],
    [0.00000024819, 2.92230738957, 5487.0216606585],
    [0.00000020615, 3.71821460067, 7079.61767429131],
    [0.00000019621, 2.88650825392, 5507.7970561509],
    [0.00000018378, 1.46521342874, 11790.8729061423],
    [0.00000016494, 6.21543454587, 11507.0135872771],
    [0.00000016756, 3.81938434057, 7058.8422787989],
    [0.00000014558, 5.97530104893, 6290.4332144757],
    [0.00000014404, 0.68122522191, 6276.2061204741],
    [0.00000014052, 1.45747121073, 796.5418242999],
    [0.00000012261, 4.15789187748, 4693.75913722409],
    [0.00000012758, 0.34831751321, 7.3573644843],
    [0.00000010086, 3.29242550455, 3739.0052475915],
    [0.00000009469, 4.6392045785, 6070.0205720369],
    [0.00000010425, 2.38242547117, 6284.2999885431],
    [0.00000010425, 4.26610810148, 6282.3393464067],
    [0.0000000957, 1.89427100067, 4137.1542509997],
    [0.00000009044, 2.00972967096, 6496.6187629129],
    [0.00000008544, 0.05731253621, 1194.6908277081],
    [0.00000008214, 1.25401494002, 1589.3167127673],
    [0.00000006157, 3.35676469316, 8827.6340873583],
    [0.00000006271, 4.75475820102, 8429.4850839501],
    [0.00000005524, 5.3694101419, 4933.4522578161],
    [0.00000007314, 0.49102526454, 4535.3032544079],
    [0.00000005157, 5.14965163127, 11770.0975106499],
    [0.00000006749, 4.32513020462, 5088.8726572503],
    [0.00000004853, 0.62462823219, 6040.5910635009],
    [0.00000005304, 5.64244320178, 3154.4432674121],
    [0.00000004985, 4.62777616911, 12569.91863581531],
    [0.00000004709, 3.96386608147, 5331.6012612243],
    [0.00000004601, 6.02376124126, 6526.04827144891],
    [0.00000004201, 1.28125193997, 7633.1870771337],
    [0.00000005607, 2.55800509408, 5729.7502646325],
    [0.00000004257, 4.12450123624, 3930.4535137031],
    [0.00000004394, 0.04709285339, 12559.2819704655],
    [0.0000000387, 2.68681123019, 7235.0380737255],
    [0.00000005154, 6.15930214427, 8031.3360805419],
    [0.00000005036, 4.09009014859, 6836.8890703173],
    [0.00000005076, 2.30606090748, 7477.7666776995],
    [0.00000003593, 2.40570544354, 12565.9078824993],
    [0.00000003384, 5.40354177904, 10977.32262218251],
    [0.00000003371, 0.28961103245, 11371.9485072417],
    [0.00000003536, 3.73353119602, 4164.0681721295],
    [0.00000004292, 4.93786086114, 1592.8398311163],
    [0.00000003407, 2.4059927333, 3128.6325825793],
    [0.00000003152, 1.73356525688, 5223.93773728571],
    [0.00000002883, 4.92077247219, 1747.7725955835],
    [0.00000002751, 5.24449444697, 7342.7015976641],
    [0.00000003323, 1.91880015934, 801.5771136403],
    [0.00000002999, 2.25355241223, 8636.18582124671],
    [0.00000002496, 3.52078273708, 2145.92159899169],
    [0.00000003358, 4.25271343539, 155.17658195069],
    [0.00000002297, 4.53559364224, 17260.3984721739],
    [0.00000002047, 3.53660263792, 1990.9888345245],
    [0.00000002778, 1.46152428305, 5481.4987363511],
    [0.00000002025, 1.44003078455, 951.4745887671],
    [0.00000002663, 5.71398175957, 26.0545023163],
    [0.00000002009, 5.73390835065, 4690.7236538421],
    [0.00000002148, 1.89688144273, 537.0483295789],
    [0.00000001853, 2.84762029989, 553.32558535889],
    [0.00000002478, 0.03933370984, 1349.62359217529],
    [0.00000002023, 2.39095052485, 522.8212355773],
    [0.00000001735, 2.91944410412, 529.44714761109],
    [0.00000002417, 5.16772880951, 7085.1405985987],
    [0.00000001809, 0.78457177103, 397.9051859247],
    [0.00000001893, 4.22746619412, 9438.0067523705],
    [0.00000001708, 0.29122424525, 10989.0519750185],
    [0.00000001898, 2.3400737078, 5216.33655531789],
    [0.0000000182, 1.8772897448, 5230.5636493195],
    [0.00000001541, 1.10077450497, 426.8420083595],
    [0.00000001555, 3.67004127739, 13096.0864825609],
    [0.00000001779, 1.80817581905, 12562.8723991173],
    [0.00000001448, 0.18764842398, 5753.14106741329],
    [0.0000000145, 0.99962470222, 6262.96434807611],
    [0.0000000145, 5.64890887043, 6303.6749868737],
    [0.00000001822, 1.70526332053, 10973.7995038335],
    [0.00000001372, 0.89281758077, 7875.91568110771],
    [0.00000001375, 0.76961577554, 7084.6529636317],
    [0.000000014, 4.85224030747, 12721.8159169005],
    [0.00000001247, 1.86305212941, 2119.00767786191],
    [0.00000001231, 4.10244270612, 18319.7804023631],
    [0.00000001141, 3.49241515175, 1066.7392946735],
    [0.00000001138, 2.80935582144, 2942.7072407751],
    [0.00000001047, 6.02902034733, 5642.93474619389],
    [0.00000001058, 3.76081315695, 242.97242145751],
    [0.00000001025, 5.32138364615, 10447.14402212089],
    [0.00000000973, 0.24159402695, 640.1411037975],
    [0.00000001114, 5.94057908115, 15721.0826023619],
    [0.00000000963, 2.13180404708, 2389.1378379327],
    [0.00000000941, 5.78706319005, 20426.8149099055],
    [0.00000001068, 0.3739370227, 529.9347825781],
    [0.00000000929, 3.11135132378, 10575.6505004253],
    [0.00000000899, 1.07875107899, 16496.6052136859],
    [0.00000000889, 0.29953586851, 6277.7967431675],
    [0.00000000889, 0.06581239696, 6288.8425917823],
    [0.00000001018, 4.23379398746, 12540.0971976665],
    [0.0000000106, 1.05626464973, 5760.7422493811],
    [0.00000001017, 5.59172649862, 6805.89708556871],
    [0.00000000797, 5.364162766, 14314.4119305333],
    [0.00000000795, 1.67821896162, 6286.6060248927],
    [0.00000000795, 4.97031461103, 6280.0333100571],
    [0.000000008, 4.75445763497, 12029.5910053709],
    [0.00000000719, 3.86746073982, 9623.9320941747],
    [0.00000000698, 0.23124353834, 6148.2545874395],
    [0.00000000686, 5.36448356218, 5856.7214765989],
    [0.00000000673, 5.5618480784, 12964.5445208745],
    [0.00000000902, 2.26778049127, 13368.2164485901],
    [0.00000000678, 0.13408295783, 6418.38474751031],
    [0.00000000671, 1.28940504615, 6709.91785835091],
    [0.00000000744, 4.258207053, 12043.8180993725],
    [0.00000000706, 4.09030374624, 16730.70750707931],
    [0.00000000661, 3.99296008106, 14712.5609339415],
    [0.00000000633, 0.86914955896, 4292.5746504339],
    [0.00000000621, 3.31200729066, 13119.9649203087],
    [0.00000000638, 0.47109166303, 4690.23601887509],
    [0.00000000625, 1.88693051693, 13518.1139237169],
    [0.00000000637, 6.16733887432, 5746.5151553795],
    [0.00000000628, 1.85369027207, 4686.6455902233],
    [0.00000000653, 4.28657823528, 3929.96587873609],
    [0.00000000578, 5.33616352365, 5088.3850222833],
    [0.00000000563, 4.82044552939, 10447.6316570879],
    [0.0000000061, 0.48716946879, 6820.1241795703],
    [0.00000000666, 3.30009380787, 3634.37720703489],
    [0.0000000072, 0.47572131456, 13916.2629271251],
    [0.0000000062, 5.87390167695, 31415.6230674405],
    [0.00000000553, 4.28779208332, 6259.44122972711],
    [0.00000000553, 2.36074148933, 6307.1981052227],
    [0.00000000523, 0.75768878632, 14143.7390599141],
    [0.00000000524, 5.54806074141, 12139.7973265903],
    [0.00000000569, 0.12658241682, 12036.7045523717],
    [0.00000000514, 2.30528734098, 4700.87268422489],
    [0.00000000563, 2.21509710432, 11014.8626598513],
    [0.00000000495, 3.58067034949, 13362.6935242827],
    [0.00000000481, 2.50655660751, 6279.4383321169],
    [0.00000000481, 4.14197696514, 6287.2010028329],
    [0.00000000466, 4.51385713822, 10177.5014970171],
    [0.0000000044, 0.4571681154, 1577.5873599313],
    [0.00000000437, 3.18132586326, 11499.9000402763],
    [0.00000000452, 5.55409870988, 12573.5090644671],
    [0.00000000499, 1.08746970886, 12410.9751180321],
    [0.0000000044, 2.15051971988, 24073.1652872599],
    [0.00000000587, 4.7191709418, 6.86972951729],
    [0.00000000388, 2.041186026, 7860.17557495569],
    [0.00000000398, 5.77147994683, 8274.0646845159],
    [0.00000000423, 1.16599451585, 4694.2467721911],
    [0.0000000053, 3.0067279932, 12592.6938372661],
    [0.00000000379, 2.02388854283, 6180.2268932563],
    [0.00000000379, 4.62464502982, 6386.4124416935],
    [0.00000000377, 5.90352173005, 7872.39256275871],
    [0.00000000419, 5.62219874401, 5327.7199258663],
    [0.00000000383, 6.24432820927, 6247.2918007975],
    [0.00000000383, 0.40420536338, 6319.34753415231],
    [0.00000000375, 5.62315844522, 2352.6223362883],
    [0.00000000457, 4.19200440747, 6077.1341190377],
    [0.00000000457, 2.45652916518, 6489.5052159121],
    [0.00000000481, 1.89483272077, 4292.0870154669],
    [0.00000000344, 0.28668049892, 18451.3223640495],
    [0.00000000453, 0.7257723698, 2787.2868413409],
    [0.00000000364, 4.39782645564, 6245.2919948391],
    [0.00000000364, 2.25070711701, 6321.3473401107],
    [0.00000000327, 2.71208539186, 12323.6669134923],
    [0.00000000358, 4.87210297876, 9917.45305702629],
    [0.00000000342, 0.54833716779, 6262.5442719825],
    [0.00000000342, 6.10019640486, 6304.0950629673],
    [0.00000000318, 0.13364568371, 11926.4982311523],
    [0.0000000032, 2.70295484544, 77714.015285604],
    [0.00000000354, 1.02467818407, 7238.9194090835],
    [0.00000000318, 5.32503015719, 6254.8704800071],
    [0.00000000318, 1.32350341546, 6311.7688549427],
    [0.00000000304, 2.00970548291, 12779.6946129043],
    [0.00000000343, 3.71302827314, 6298.57213865991],
    [0.00000000343, 2.93550529951, 6268.0671962899],
    [0.00000000359, 4.09955266779, 1052.51220067191],
    [0.00000000398, 0.12298117861, 1551.2890401315],
    [0.00000000306, 2.58873546625, 5863.8350235997],
    [0.000000003, 1.77608786075, 90280.1669855868],
    [0.00000000307, 3.29263568042, 3893.93801205869],
    [0.00000000297, 0.51221148619, 5429.63565075589],
    [0.00000000365, 2.74542548477, 10022.0810975829],
    [0.00000000336, 2.72364909606, 17782.9758902677],
    [0.00000000295, 4.05850212848, 6702.8043113501],
    [0.00000000288, 2.18795828306, 18073.9487561337],
    [0.00000000287, 3.33776996109, 1577.0997249643],
    [0.00000000378, 0.39946174567, 2353.1099712553],
    [0.00000000289, 3.04361347297, 213.5429129215],
    [0.00000000347, 0.7283850104, 5223.4501023187],
    [0.00000000321, 2.23787969105, 17797.2029842693],
    [0.00000000289, 5.30650717041, 220.6564599223],
    [0.0000000026, 1.04284839158, 955.3559241251],
    [0.00000000268, 3.62847841862, 14945.0723560709],
    [0.00000000242, 4.34386674771, 2544.5582373669],
    [0.00000000245, 2.31719119888, 7632.6994421667],
    [0.00000000234, 4.0739343796, 1596.43025976811],
    [0.00000000267, 5.83055956746, 206.42936592071],
    [0.00000000282, 4.50260656021, 13341.9181287903],
    [0.00000000279, 3.13773429847, 4731.7868098599],
    [0.0000000029, 2.03216763842, 5642.4420600927],
    [0.00000000298, 0.93822937797, 17790.08943726851],
    [0.0000000027, 2.16529088691, 12168.2465140581],
    [0.00000000294, 2.52895912407, 2146.4092339587],
    [0.00000000214, 0.93543623291, 8030.8484455749],
    [0.00000000207, 1.60966002008, 213.0552779545],
    [0.00000000216, 5.60316710178, 3185.43584474911],
    [0.00000000195, 2.87143133187, 5884.68302909969],
    [0.00000000199, 3.93236191602, 1748.2602305505],
    [0.0000000025, 4.61596023287, 6924.1972748571],
    [0.00000000194, 2.36749003244, 641.12142486571],
    [0.00000000203, 2.25356528795, 6503.7323099137],
    [0.00000000203, 4.3949682847, 6062.9070250361],
    [0.00000000258, 5.6302500757, 796.0541893329],
    [0.00000000189, 1.63377883836, 11506.52595231009],
    [0.00000000186, 0.12949416246, 18209.5740811437],
    [0.00000000184, 4.20955149479, 12566.4628277691],
    [0.0000000018, 5.76808682495, 853.4401992355],
    [0.00000000185, 4.68506649147, 3495.78900865049],
    [0.00000000205, 4.93663483706, 5849.1202946311],
    [0.00000000187, 5.91135912176, 10213.5293636945],
    [0.00000000187, 2.05685668523, 6290.36590417291],
    [0.00000000187, 4.59167688742, 6276.2734307769],
    [0.00000000235, 5.91611965384, 9779.3524936089],
    [0.00000000173, 1.38702654435, 19651.2922985815],
    [0.00000000184, 4.65365446464, 12566.32820716351],
    [0.0000000023, 2.23774195109, 12567.37583853451],
    [0.00000000166, 1.3259758191, 110.45013870291],
    [0.00000000189, 2.84387211432, 3.76693583251],
    [0.00000000166, 1.19482070134, 433.9555553603],
    [0.00000000186, 4.46969004938, 5863.3473886327],
    [0.00000000184, 3.01631602481, 10983.94853421629],
    [0.00000000184, 3.38049875173, 6037.4880212455],
    [0.00000000156, 2.34433370292, 2648.6986429565],
    [0.00000000182, 3.4727151585, 10969.72144021469],
    [0.00000000175, 3.2677154823, 6529.1513137043],
    [0.00000000154, 5.67725689556, 6453.9925380941],
    [0.00000000154, 0.97127667708, 6112.6467968557],
    [0.00000000164, 4.52273465985, 12353.0964220283],
    [0.00000000146, 4.05729660897, 149.8070146181],
    [0.00000000184, 0.20513580951, 11015.3502948183],
    [0.00000000191, 2.29402324776, 3894.4256470257],
    [0.00000000144, 3.76178854682, 18636.1722720197],
    [0.00000000146, 1.99164382254, 13760.8425276909],
    [0.00000000142, 1.34565609994, 4156.95462512869],
    [0.00000000185, 3.72101619927, 7234.5504387585],
    [0.00000000133, 0.01824676794, 18139.5383188994],
    [0.00000000131, 4.75893185547, 5507.3094211839],
    [0.00000000146, 5.03857686201, 18875.2820522905],
    [0.00000000128, 3.41348197806, 6069.53293706989],
    [0.00000000128, 0.18086618365, 16200.52890701769],
    [0.00000000123, 5.45134858107, 20.5315780089],
    [0.00000000121, 0.98195264587, 17256.8753538249],
    [0.00000000123, 0.10275700246, 6393.5259886943],
    [0.00000000123, 0.26259126301, 6173.1133462555],
    [0.00000000117, 4.4771171305, 18852.9944858067],
    [0.0000000012, 1.0391312214, 9381.2034902007],
    [0.00000000113, 2.33706395068, 65147.37595065419],
    [0.00000000137, 3.68199834086, 16201.0165419847],
    [0.00000000113, 5.07439785395, 6836.40143535029],
    [0.00000000123, 4.42839393502, 12565.4151963981],
    [0.00000000132, 6.08414353296, 17655.0243572331],
    [0.00000000113, 4.12294240934, 10575.1628654583],
    [0.00000000113, 2.0969640014, 10213.0417287275],
    [0.00000000116, 2.23828708218, 17253.2849251731],
    [0.0000000012, 2.28034205827, 10420.23010099111],
    [0.00000000109, 0.5059770528, 633.0275567967],
    [0.00000000103, 0.11832394316, 6295.0490203109],
    [0.00000000103, 0.24702432231, 6271.5903146389],
    [0.00000000104, 5.58102765204, 23013.7833570707],
    [0.00000000105, 3.75605193168, 11790.3852711753],
    [0.00000000109, 2.65465737803, 3340.36860921629],
    [0.00000000102, 2.59681923716, 10970.2090751817],
    [0.00000000101, 4.42190708814, 4803.9654584435],
    [0.00000000114, 2.21750546661, 4171.1817191303],
    [0.00000000111, 3.66232090402, 1582.2031657665],
    [0.00000000107, 2.47220154064, 23543.4743221653],
    [0.00000000099, 2.67705199399, 10973.3118688665],
    [0.00000000102, 5.67042027327, 6549.9267091967],
    [0.00000000102, 0.97811329938, 6016.7126257531],
    [0.0000000012, 2.49695982999, 11514.1271342779],
    [0.00000000095, 2.69903868611, 17267.5120191747],
    [0.00000000121, 0.05336928445, 13625.7774476555],
    [0.000000001, 2.04355401267, 10976.83498721549],
    [0.0000000009, 3.68840859712, 76.50988875911],
    [0.000000001, 4.37665365923, 8661.9965060795],
    [0.00000000089, 5.33255005639, 1350.1112271423],
    [0.00000000087, 4.3339033213, 9917.9406919933],
    [0.00000000086, 5.93949751968, 12809.12412144031],
    [0.00000000095, 1.34358559692, 12345.9828750275],
    [0.00000000084, 1.545308678, 775.2787938405],
    [0.00000000106, 5.14280637669, 11216.5281078075],
    [0.00000000095, 2.50046187937, 12012.8261146239],
    [0.00000000082, 0.0160091831, 5643.4223811609],
    [0.00000000081, 3.84772162011, 11614.6771112157],
    [0.00000000084, 1.14755262027, 6255.9181113781],
    [0.00000000084, 5.50098095238, 6310.7212235717],
    [0.0000000008, 0.34711727404, 6923.2169537889],
    [0.00000000085, 5.79487336888, 5635.8211991931],
    [0.00000000084, 3.04423309467, 10440.03047512009],
    [0.0000000008, 4.19702378753, 3583.5848481573],
    [0.00000000092, 0.87932993874, 10818.3791043993],
    [0.00000000077, 5.70308186355, 6993.2527160332],
    [0.0000000008, 1.36958890049, 13521.9952590749],
    [0.00000000104, 5.42045444776, 5650.0482931947],
    [0.00000000093, 0.29330855376, 4732.2744448269],
    [0.00000000085, 0.17489631763, 22805.4917485101],
    [0.00000000086, 0.81273058913, 12360.2099690291],
    [0.00000000075, 4.00156639703, 5120.35732810009],
    [0.0000000009, 0.6255895953, 6370.62787201471],
    [0.0000000009, 6.02294397735, 6196.0114629351],
    [0.00000000082, 0.197679481, 18842.3578204569],
    [0.00000000101, 6.08995730057, 3097.64000524229],
    [0.00000000094, 5.45896547971, 10177.01386205009],
    [0.00000000083, 5.31992956371, 18415.7596295809],
    [0.00000000073, 6.09826272325, 949.4194264533],
    [0.00000000101, 2.86248284119, 3104.6862419403],
    [0.00000000074, 5.96635290969, 13517.62628874989],
    [0.00000000092, 2.35039346805, 16858.7263504167],
    [0.00000000075, 0.0019870303, 1059.1381127057],
    [0.00000000085, 6.09242867296, 398.3928208917],
    [0.00000000069, 0.89145782253, 11713.1991357143],
    [0.00000000084, 4.35477901935, 2378.9206560881],
    [0.00000000069, 0.61262618132, 11712.71150074729],
    [0.00000000075, 1.62832949134, 30356.2411372513],
    [0.00000000067, 4.61214364579, 3154.9309023791],
    [0.00000000076, 4.83480996889, 18429.9867235825],
    [0.00000000068, 4.26265140929, 11925.5179100841],
    [0.00000000067, 3.2460963889, 10454.25756912169],
    [0.00000000073, 6.0704772451, 15670.83794192309],
    [0.00000000065, 0.20786131115, 6438.2524319421],
    [0.00000000069, 3.29499829591, 17298.4261448097],
    [0.00000000087, 5.09754892709, 3904.1551939033],
    [0.00000000076, 0.73384165663, 5231.0512842865],
    [0.00000000064, 3.69394501139, 3496.2766436175],
    [0.00000000078, 4.31639568529, 8672.21368792411],
    [0.00000000066, 3.41816290372, 14143.2514249471],
    [0.00000000063, 0.99537559299, 24357.0246061251],
    [0.00000000063, 5.29204726636, 15720.5949673949],
    [0.00000000061, 3.726990386, 16460.5773470085],
    [0.00000000073, 4.50408758477, 9387.76209193169],
    [0.00000000057, 2.80099560279, 17259.91083720689],
    [0.00000000059, 0.69432195316, 9778.8648586419],
    [0.00000000058, 3.24953926506, 155.6642169177],
    [0.0000000006, 3.51548937348, 34570.3101523361],
    [0.00000000057, 4.46074610322, 149854.6439522914],
    [0.00000000056, 5.33393809517, 12456.1891962469],
    [0.00000000056, 0.9124024473, 17996.2749857057],
    [0.00000000056, 2.17966368743, 11764.5745863425],
    [0.00000000054, 2.96145051332, 4705.4884900601],
    [0.00000000055, 4.53949491324, 13915.77529215809],
    [0.00000000061, 0.15191781763, 28237.4772768729],
    [0.00000000065, 5.87045161229, 7335.5880506633],
    [0.00000000072, 0.77556931591, 6055.8435346859],
    [0.00000000072, 5.87296425674, 6510.7958002639],
    [0.00000000071, 0.23083621209, 12545.6201219739],
    [0.00000000061, 1.27148175728, 6312.74917601091],
    [0.00000000061, 5.37705181537, 6253.8901589389],
    [0.00000000052, 0.26640147565, 5326.5428765373],
    [0.00000000054, 1.21229891621, 2699.49100183409],
    [0.00000000052, 2.44818566509, 8983.0544867925],
    [0.00000000066, 2.35337977576, 14919.2616712381],
    [0.0000000005, 5.93502263343, 5572.8989839496],
    [0.00000000051, 0.76420455409, 16522.4158985187],
    [0.00000000049, 4.18738074622, 35579.9350570535],
    [0.00000000053, 1.36303997543, 6208.5380689076],
    [0.00000000053, 5.28549359722, 6358.1012660422],
    [0.00000000049, 4.92672897893, 21393.7857873411],
    [0.00000000049, 6.04327871377, 5547.4431539431],
    [0.00000000049, 0.60525485888, 7019.19618100671],
    [0.00000000049, 2.59123701567, 12416.8323203317],
    [0.0000000005, 5.65157500725, 12592.2062022991],
    [0.0000000005, 0.07520350695, 26084.2656236997],
    [0.00000000051, 3.40680645218, 23006.6698100699],
    [0.00000000058, 2.46543782438, 15141.14697682849],
    [0.00000000047, 0.97665096734, 24279.3508356971],
    [0.00000000049, 4.98006572526, 6816.53375091851],
    [0.00000000049, 1.66846784739, 5750.1055840313],
    [0.00000000046, 3.45134537804, 19379.1623325523],
    [0.00000000052, 4.17729143118, 16737.33341911309],
    [0.00000000047, 2.09298679166, 24066.0517402591],
    [0.00000000046, 5.73796654718, 104351.8563837803],
    [0.00000000063, 1.54245276158, 8662.48414104651],
    [0.00000000048, 1.71424177408, 26735.7014447297],
    [0.00000000046, 5.48854983581, 12132.6837795895],
    [0.0000000005, 4.49443808542, 24602.8562523545],
    [0.00000000054, 0.03975141461, 7834.3648901229],
    [0.00000000045, 5.05887207146, 161000.92955515758],
    [0.00000000049, 4.51484833854, 29303.9727540629],
    [0.00000000049, 3.00236481482, 10984.4361691833],
    [0.00000000045, 5.42122497288, 45584.9289947039],
    [0.00000000046, 3.44074843825, 5244.2930566845],
    [0.00000000048, 1.96431249949, 23581.0143598341],
    [0.00000000049, 0.60097746518, 19650.8046636145],
    [0.00000000049, 4.98977220505, 29289.7456600613],
    [0.00000000044, 3.01088620106, 6390.9831914135],
    [0.00000000044, 3.63764737159, 6175.6561435363],
    [0.00000000051, 1.08500510566, 17789.60180230149],
    [0.00000000042, 1.47304377234, 24705.9490265731],
    [0.00000000042, 4.33726197214, 15663.79170522509],
    [0.00000000043, 1.51170891404, 16460.08971204149],
    [0.00000000043, 1.85670214007, 553.8132203259],
    [0.00000000041, 4.78695133916, 17370.6047933933],
    [0.00000000053, 1.02071442021, 13119.47728534169],
    [0.00000000042, 0.40756986853, 4164.5558070965],
    [0.00000000041, 3.62600931231, 23020.8969040715],
    [0.00000000045, 2.13148338898, 54247.1693182669],
    [0.0000000004, 3.00393862246, 32243.2546833971],
    [0.0000000004, 0.45945430396, 24336.2492106327],
    [0.0000000004, 0.14772670564, 11769.6098756829],
    [0.00000000045, 4.68905632727, 16723.10632511149],
    [0.00000000045, 1.54746367368, 16723.5939600785],
    [0.00000000042, 4.3224744279, 8827.14645239129],
    [0.0000000004, 0.00254937606, 8402.0835278533],
    [0.00000000039, 5.06793905702, 16062.4283436003],
    [0.00000000044, 2.87431244066, 5856.23384163189],
    [0.00000000038, 2.71291798518, 6297.5467614765],
    [0.00000000038, 3.93561558747, 6269.0925734733],
    [0.00000000041, 4.9531312813, 15508.8589407579],
    [0.00000000038, 0.25558032671, 6394.50630976251],
    [0.00000000038, 0.10976793876, 6172.1330251873],
    [0.00000000039, 3.31895424299, 29826.5501721567],
    [0.00000000046, 5.02561530595, 17297.9385098427],
    [0.00000000041, 2.4723614991, 6309.1303523077],
    [0.00000000038, 1.11170997081, 29089.0552334685],
    [0.00000000038, 6.16488744565, 11933.6117781531],
    [0.00000000037, 4.91170884792, 26482.4146271079],
    [0.00000000037, 2.07642652738, 20452.6255947383],
    [0.00000000037, 5.02138933475, 18073.46112116669],
    [0.00000000036, 1.41330554556, 11499.41240530929],
    [0.00000000045, 0.04410300421, 3340.8562441833],
    [0.00000000049, 5.78167784671, 18216.6876281445],
    [0.00000000038, 6.16266694488, 18202.4605341429],
    [0.00000000041, 5.48085477947, 5216.8241902849],
    [0.00000000036, 4.6405951428, 4060.97539791089],
    [0.00000000048, 0.43106257187, 951.9622237341],
    [0.00000000041, 2.33852383906, 18848.98373249069],
    [0.00000000038, 6.17960213131, 26709.8907598969],
    [0.00000000036, 4.6960137864, 28230.4310401749],
    [0.00000000036, 0.39760453863, 24491.18197509989],
    [0.00000000036, 6.28050310342, 9924.5666040271],
    [0.00000000048, 0.32621587842, 8982.5668518255],
    [0.00000000037, 5.17748996647, 22484.0923919761],
    [0.00000000047, 1.64189885412, 6040.10342853389],
    [0.00000000034, 5.26052334707, 6418.9449924849],
    [0.00000000034, 1.38801022558, 6147.69434246491],
    [0.00000000034, 2.0992747976, 9380.71585523369],
    [0.00000000036, 5.01642644412, 7238.4317741165],
    [0.00000000034, 1.97967235505, 17272.1278250099],
    [0.00000000037, 2.80234472663, 58953.3892607775],
    [0.00000000034, 1.90506635542, 29026.7290469913],
    [0.00000000033, 2.30422309015, 12721.32828193349],
    [0.00000000035, 3.20661909223, 7322.34627826531],
    [0.00000000044, 2.79016934175, 3981.73385156551],
    [0.00000000033, 2.02741588975, 19804.5834740993],
    [0.00000000033, 4.13127522861, 173567.0812551404],
    [0.00000000033, 4.59578048276, 205.9417309537],
    [0.00000000033, 3.87810188817, 23013.29572210369],
    [0.00000000034, 0.56182222293, 49515.1386909235],
    [0.00000000034, 4.95130100456, 38500.5198485557],
    [0.00000000032, 4.38300866562, 17686.9966630499],
    [0.00000000036, 0.10343586811, 5641.9544251257],
    [0.00000000032, 4.48170445266, 21228.63584102931],
    [0.00000000033, 1.70919210465, 34520.5531268643],
    [0.00000000033, 4.08300924175, 8635.69818627969],
    [0.00000000031, 0.30962555206, 5746.0275204125],
    [0.00000000041, 4.09101330171, 21202.3375212295],
    [0.00000000037, 1.21597687953, 7349.81514466491],
    [0.00000000034, 0.61019544663, 16496.11757871889],
    [0.00000000032, 2.47223060088, 33019.2649296881],
    [0.00000000032, 6.25412877228, 21150.56954840009],
    [0.00000000037, 3.41910013684, 29296.8592070621],
    [0.00000000036, 3.45170661535, 27511.2240560537],
    [0.00000000035, 2.20855027459, 11933.12414318609],
    [0.00000000035, 2.69261850768, 11918.89704918449],
    [0.00000000035, 0.83074174405, 29062.7569136687],
    [0.0000000003, 2.96012497927, 12490.1294461907],
    [0.00000000032, 0.38688555099, 6334.60000533731],
    [0.00000000032, 6.26164802166, 6232.03932961249],
    [0.00000000029, 2.489140841, 419.2408263917],
    [0.00000000029, 2.489140841, 419.72846135871],
    [0.00000000029, 0.09098498823, 16858.23871544969],
    [0.0000000003, 4.30269873097, 16208.13008898551],
    [0.00000000029, 2.26254947152, 27278.7126339243],
    [0.00000000032, 3.16446260317, 5017.2645538815],
    [0.00000000028, 1.87847577782, 24080.2788342607],
    [0.0000000003, 2.57345584103, 23539.9512038163],
    [0.00000000029, 6.17121903514, 18606.25512851669],
    [0.0000000003, 3.16071544619, 30665.9111409493],
    [0.00000000034, 5.862790153, 6660.6932753907],
    [0.00000000034, 0.78574341965, 5905.94605955911],
    [0.00000000038, 5.12222686816, 31571.0434668747],
    [0.00000000038, 2.95935499043, 16061.94070863329],
    [0.00000000029, 0.07805875622, 23539.46356884929],
    [0.00000000033, 1.31621330654, 3738.51761262449],
    [0.00000000028, 4.45185289388, 2942.21960580809],
    [0.00000000032, 4.32330584281, 15110.7099373497],
    [0.0000000003, 1.39195112722, 55023.1795645579],
    [0.00000000027, 0.53286078729, 233141.55822184499],
    [0.0000000003, 2.32405719366, 12587.1709129587],
    [0.00000000028, 5.54771281521, 34911.6558935745],
    [0.00000000027, 6.17188911074, 1692.40948698591],
    [0.00000000027, 4.56663555607, 2544.07060239989],
    [0.00000000027, 3.42500443489, 24382.8352909579],
    [0.00000000027, 5.99215939135, 6205.6458970469],
    [0.00000000027, 0.6563741813, 6360.99343790291],
    [0.00000000027, 0.24480889857, 31172.8944634665],
    [0.00000000026, 3.76734683925, 36949.4746259077],
    [0.00000000034, 6.02674277322, 18053.1733606413],
    [0.00000000027, 2.32047706036, 32367.3414736911],
    [0.00000000027, 1.77181133426, 4487.57358878689],
    [0.00000000028, 3.80331914659, 10239.3400485273],
    [0.00000000026, 6.01470923824, 4796.85191144269],
    [0.00000000026, 6.27941236443, 6226.4212925393],
    [0.00000000026, 0.36912120822, 6340.2180424105],
    [0.00000000029, 0.18788001431, 5974.0413448191],
    [0.00000000029, 0.17746825116, 6592.5979901307],
    [0.00000000026, 3.39870851542, 19402.55313533309],
    [0.00000000028, 2.42845493949, 46386.7499258277],
    [0.00000000032, 0.33223863826, 9225.7830907665],
    [0.00000000026, 2.5466538221, 9910.33951002549],
    [0.00000000025, 5.74078884001, 15265.64270181689],
    [0.00000000029, 5.90495655038, 52176.0501006319],
    [0.00000000027, 4.22338082584, 62883.5989569971],
    [0.00000000024, 0.55027097677, 11617.21990849651],
    [0.00000000024, 2.62016281496, 5120.8449630671],
    [0.00000000028, 3.25064295131, 6680.98103591609],
    [0.00000000024, 4.40689701323, 522.3336006103],
    [0.00000000025, 3.8636229191, 6263.64990657511],
    [0.00000000025, 2.78491065355, 6302.9894283747],
    [0.00000000029, 2.44405132476, 23581.5019948011],
    [0.00000000024, 0.5070929141, 29424.8780503995],
    [0.00000000028, 2.66240986547, 16737.8210540801],
    [0.00000000024, 1.98880441412, 22743.16556203289],
    [0.00000000024, 5.13039706771, 22743.6531969999],
    [0.00000000024, 5.85302121512, 25158.8455372489],
    [0.00000000025, 3.95115098429, 21424.2228268199],
    [0.00000000025, 0.8095583307, 21424.7104617869],
    [0.00000000024, 1.92863541994, 14712.07329897449],
    [0.00000000028, 4.50601984314, 5760.25461441409],
    [0.00000000024, 3.73455640738, 31969.1924702829],
    [0.00000000023, 0.62345777089, 17893.1822114871],
    [0.0000000003, 3.85563309519, 8584.9054833843],
    [0.00000000024, 3.21746306158, 23550.5878691661],
    [0.00000000023, 1.36063534536, 6717.0314053517],
    [0.00000000022, 3.99741791962, 7445.7943718827],
    [0.00000000023, 5.13650786055, 5849.6079295981],
    [0.00000000025, 0.81555419576, 14155.4684127501],
    [0.00000000023, 3.5856941208, 6294.36536773881],
    [0.00000000023, 3.06283945185, 6272.273967211],
    [0.00000000024, 4.24597953395, 18208.1061251085],
    [0.00000000024, 1.10438688036, 18208.5937600755],
    [0.00000000021, 5.78251945962, 22779.6810636773],
    [0.00000000029, 3.31448732534, 28628.5800435831],
    [0.00000000021, 5.13427576878, 40879.6843221273],
    [0.00000000021, 4.08575884387, 30221.1760572159],
    [0.00000000022, 1.38262024424, 4379.8828549737],
    [0.00000000022, 5.26591980546, 8186.7564799761],
    [0.00000000022, 4.52225402167, 28760.05469496669],
    [0.00000000026, 3.41053115091, 18422.8731765817],
    [0.0000000002, 0.8072026736, 12036.21691740469],
    [0.0000000002, 4.78724181293, 28313.0449871775],
    [0.00000000027, 0.67000770864, 34513.5068901663],
    [0.0000000002, 2.0763093298, 34115.3578867581],
    [0.0000000002, 1.72148703277, 21548.7185518083],
    [0.0000000002, 3.685764303, 17654.5367222661],
    [0.00000000025, 3.53209868087, 55798.7021758819],
    [0.0000000002, 0.81961551511, 20597.4877805247],
    [0.0000000002, 2.60684350676, 18875.76968725751],
    [0.00000000022, 0.44774356245, 1588.82907780029],
    [0.00000000024, 1.20852424503, 9411.7084325707],
    [0.00000000019, 5.85945140949, 536.5606946119],
    [0.0000000002, 4.99560905506, 6187.3404402571],
    [0.0000000002, 1.65292451759, 6379.2988946927],
    [0.00000000022, 4.44471803531, 18326.8939493639],
    [0.00000000022, 2.1834821363, 6233.5626420031],
    [0.00000000022, 4.46505143635, 6333.0766929467],
    [0.00000000018, 2.03036294822, 5972.4788686065],
    [0.00000000018, 4.61817062443, 6594.1604663433],
    [0.00000000019, 4.28397604583, 6948.0757126049],
    [0.00000000019, 2.36455752682, 5618.5636223449],
    [0.00000000019, 0.18461366541, 83974.0791732134],
    [0.00000000019, 4.29574443999, 84020.1030979774],
    [0.0000000002, 3.8495702723, 50316.9596220473],
    [0.0000000002, 2.85391796921, 9070.3626913323],
];

const X2: &[Term] = &[
    [0.00052911498, 3.32403354915, 6283.3196674749],
    [0.00006074441, 2.05485843872, 0.2438174835],
    [0.00002406871, 4.23086027149, 12566.3955174663],
    [0.00000096033, 4.14485769516, 18849.4713674577],
    [0.00000029888, 0.73436192593, 6282.83203250789],
    [0.00000014021, 3.21121684298, 6279.7965491259],
    [0.00000013375, 3.31400005464, 6286.84278582391],
    [0.00000008148, 2.19949162987, 6309.61798727471],
    [0.00000008195, 4.38954108022, 6257.0213476751],
    [0.00000008001, 5.91956929382, 6127.8992680407],
    [0.00000007754, 0.72231700953, 6438.7400669091],
    [0.00000007223, 5.38114271434, 83997.09113559539],
    [0.00000004616, 6.1670322737, 710.1768660418],
    [0.0000000306, 4.83964573312, 4705.9761250271],
    [0.00000003717, 2.45040909403, 5507.7970561509],
    [0.00000002991, 4.05993241608, 25132.5472174491],
    [0.00000003235, 4.10584554352, 7058.8422787989],
    [0.00000002393, 3.40776365917, 775.7664288075],
    [0.00000002034, 4.34141229883, 6290.4332144757],
    [0.00000002028, 2.28023581144, 6276.2061204741],
    [0.00000002064, 1.58527926677, 7860.6632099227],
    [0.00000001914, 4.42314112548, 5487.0216606585],
    [0.0000000177, 5.05862783743, 1059.6257476727],
    [0.00000001761, 3.3790285294, 5753.6287023803],
    [0.00000001558, 2.13660228192, 7079.61767429131],
    [0.00000001551, 2.12932375831, 6040.5910635009],
    [0.00000001436, 2.85243683562, 5885.1706640667],
    [0.00000001469, 4.51404554645, 6526.04827144891],
    [0.00000001319, 3.46234944603, 6681.46867088311],
    [0.0000000118, 2.9917059583, 6813.0106325695],
    [0.00000001337, 1.03982518814, 5729.7502646325],
    [0.00000001039, 5.82323058792, 6282.3393464067],
    [0.00000001313, 2.16977183919, 529.9347825781],
    [0.00000001041, 0.76562479642, 6284.2999885431],
    [0.00000001202, 5.5990917975, 6836.8890703173],
    [0.00000000904, 2.42848578586, 5331.6012612243],
    [0.0000000087, 3.83740101245, 4933.4522578161],
    [0.00000001149, 4.59530313333, 167284.005405149],
    [0.00000001069, 5.80442130983, 1577.0997249643],
    [0.00000000772, 4.23369730112, 7235.0380737255],
    [0.00000000846, 2.93878609085, 11790.8729061423],
    [0.00000000742, 0.30768536261, 4137.1542509997],
    [0.00000000966, 3.62307276164, 11856.462468908],
    [0.00000000664, 2.78855764568, 7633.1870771337],
    [0.00000000662, 4.76048207091, 1194.6908277081],
    [0.00000000659, 1.23774551244, 11507.0135872771],
    [0.00000000853, 5.22418483353, 4535.3032544079],
    [0.00000000823, 5.77365627974, 155.17658195069],
    [0.00000000783, 5.87375907691, 5088.8726572503],
    [0.00000000785, 5.03738396313, 2353.1099712553],
    [0.00000000694, 1.93706172082, 801.5771136403],
    [0.00000000566, 6.00002295544, 796.5418242999],
    [0.00000000684, 2.68347359202, 3128.6325825793],
    [0.00000000499, 2.99674498554, 12569.91863581531],
    [0.00000000596, 1.38539217884, 8031.3360805419],
    [0.00000000486, 6.11316978391, 1589.3167127673],
    [0.00000000483, 6.25283705744, 8429.4850839501],
    [0.00000000441, 0.27873568624, 6496.6187629129],
    [0.00000000412, 5.58840963851, 4693.75913722409],
    [0.00000000561, 0.75091675093, 7477.7666776995],
    [0.0000000039, 6.20968064366, 6070.0205720369],
    [0.00000000405, 1.55299195368, 3739.0052475915],
    [0.00000000501, 3.39229516665, 1592.8398311163],
    [0.00000000392, 5.39455294636, 26.0545023163],
    [0.00000000369, 4.36331143713, 553.32558535889],
    [0.00000000483, 1.36538995021, 12036.7045523717],
    [0.00000000489, 2.13588971106, 5223.4501023187],
    [0.00000000481, 4.74275484789, 10213.5293636945],
    [0.00000000448, 0.85608336591, 156137.71980228278],
    [0.00000000321, 2.9691187918, 951.4745887671],
    [0.0000000032, 2.00218171333, 1990.9888345245],
    [0.00000000361, 0.5951950142, 12565.9078824993],
    [0.00000000361, 0.08584353459, 12721.8159169005],
    [0.00000000412, 5.91338851626, 398.3928208917],
    [0.00000000304, 0.96839213314, 4690.7236538421],
    [0.00000000356, 1.28855678128, 5481.4987363511],
    [0.00000000283, 2.2399217834, 242.97242145751],
    [0.00000000362, 3.8863384342, 9438.0067523705],
    [0.00000000248, 4.75322854174, 8827.6340873583],
    [0.00000000252, 1.16164987849, 3154.4432674121],
    [0.00000000257, 1.79452152688, 11371.9485072417],
    [0.00000000327, 3.02081233401, 14143.7390599141],
    [0.0000000023, 0.23367695814, 1747.7725955835],
    [0.00000000289, 5.24697142787, 7085.1405985987],
    [0.00000000297, 1.59965866765, 1349.62359217529],
    [0.00000000209, 0.2734167472, 11770.0975106499],
    [0.00000000207, 4.92862210539, 4164.0681721295],
    [0.00000000188, 5.64673454004, 7875.91568110771],
    [0.00000000189, 0.60545229996, 2389.1378379327],
    [0.00000000194, 0.4104695931, 10977.32262218251],
    [0.00000000176, 4.08570919572, 7342.7015976641],
    [0.00000000164, 2.79150408226, 5223.93773728571],
    [0.00000000205, 3.21370431881, 10973.7995038335],
    [0.00000000205, 2.25101785528, 13368.2164485901],
    [0.00000000139, 4.61869477858, 10575.6505004253],
    [0.00000000155, 5.81412821499, 12410.9751180321],
    [0.00000000152, 0.10500467147, 3930.4535137031],
    [0.00000000129, 5.5219353509, 397.9051859247],
    [0.00000000127, 0.96654930095, 12592.6938372661],
    [0.00000000132, 0.16052766322, 8636.18582124671],
    [0.00000000122, 4.78358483655, 13119.9649203087],
    [0.00000000163, 0.93280092706, 5507.3094211839],
    [0.00000000114, 5.70431693679, 17260.3984721739],
    [0.00000000118, 2.37854817453, 4292.5746504339],
    [0.00000000148, 5.63695738547, 17790.08943726851],
    [0.00000000123, 3.7578591005, 12562.8723991173],
    [0.00000000103, 3.36994741884, 13518.1139237169],
    [0.00000000138, 3.83865460083, 12168.2465140581],
    [0.00000000107, 4.33977826153, 10989.0519750185],
    [0.00000000104, 5.27997888785, 2145.92159899169],
    [0.00000000096, 1.97792917854, 6283.25235717211],
    [0.00000000099, 2.27831564394, 13096.0864825609],
    [0.00000000096, 1.53382620869, 6283.3869777777],
    [0.00000000084, 5.20596620689, 16730.70750707931],
    [0.00000000111, 3.96322491245, 12540.0971976665],
    [0.00000000087, 6.02515097465, 10177.5014970171],
    [0.00000000078, 4.18422621711, 12323.6669134923],
    [0.00000000076, 5.70862044549, 6709.91785835091],
    [0.00000000105, 3.5384540518, 5642.4420600927],
    [0.00000000073, 0.89693480363, 5856.7214765989],
    [0.00000000102, 0.66758153957, 250570.9196747026],
    [0.0000000007, 5.22505818809, 5753.14106741329],
    [0.00000000071, 0.56166089035, 14314.4119305333],
    [0.00000000092, 1.96485842296, 13916.2629271251],
    [0.0000000007, 2.53450052921, 7084.6529636317],
    [0.00000000091, 3.10960565577, 6924.1972748571],
    [0.00000000083, 3.98989749432, 31415.6230674405],
    [0.00000000088, 5.01539409795, 71430.45180064559],
    [0.00000000074, 1.96538390591, 529.44714761109],
    [0.00000000085, 5.97852929798, 95143.3767384616],
    [0.00000000061, 4.2311438166, 8274.0646845159],
    [0.0000000006, 5.52155170015, 16496.6052136859],
    [0.00000000058, 1.47891111226, 5642.93474619389],
    [0.00000000078, 2.41141378465, 213.5429129215],
    [0.00000000059, 4.67526538731, 640.1411037975],
    [0.00000000057, 2.06129454632, 4690.23601887509],
    [0.00000000056, 3.80170948025, 13341.9181287903],
    [0.00000000065, 3.38872777921, 4731.7868098599],
    [0.00000000051, 4.81168622601, 3893.93801205869],
    [0.0000000005, 4.1736967608, 12573.5090644671],
    [0.0000000005, 4.41669813786, 3634.37720703489],
    [0.00000000049, 2.27712508812, 18319.7804023631],
    [0.00000000066, 5.495855845, 2787.2868413409],
    [0.00000000049, 1.99905022377, 13362.6935242827],
    [0.00000000048, 3.76233131596, 12964.5445208745],
    [0.00000000053, 4.12374270394, 14919.2616712381],
    [0.00000000058, 1.2308314416, 1577.5873599313],
    [0.00000000052, 1.27828874996, 15721.0826023619],
    [0.00000000061, 3.42876383277, 4292.0870154669],
    [0.00000000044, 0.31046230867, 24073.1652872599],
    [0.00000000044, 0.38954461131, 10447.14402212089],
    [0.00000000042, 4.09986255075, 20426.8149099055],
    [0.00000000059, 1.01599200374, 84672.2320270212],
    [0.00000000051, 5.38279738858, 6370.62787201471],
    [0.00000000051, 1.26573618407, 6196.0114629351],
    [0.00000000046, 0.52171400874, 2119.00767786191],
    [0.00000000041, 4.09327874029, 3185.43584474911],
    [0.00000000056, 3.27189314076, 10976.83498721549],
    [0.00000000051, 2.37524851068, 9437.5191174035],
    [0.00000000049, 3.2115956795, 239424.6340718364],
    [0.00000000036, 6.20393463674, 3495.78900865049],
    [0.00000000044, 3.69396549327, 18139.5383188994],
    [0.00000000035, 3.61386877088, 3929.96587873609],
    [0.00000000044, 1.66014811397, 8661.9965060795],
    [0.00000000046, 3.78615165617, 3894.4256470257],
    [0.00000000034, 3.81444510796, 6262.5442719825],
    [0.00000000034, 5.98049768477, 6304.0950629673],
    [0.00000000035, 3.58408872678, 18875.2820522905],
    [0.00000000035, 6.09075949155, 10420.23010099111],
    [0.00000000032, 0.62535692558, 23013.7833570707],
    [0.00000000034, 3.61147349841, 7.3573644843],
    [0.00000000045, 1.48783646485, 3340.8562441833],
    [0.00000000035, 0.3859007697, 10213.0417287275],
    [0.00000000031, 5.38472872675, 14712.5609339415],
    [0.0000000003, 4.39715700541, 12809.12412144031],
    [0.00000000039, 1.14782571257, 9779.3524936089],
    [0.00000000041, 5.61324415849, 82576.73740351178],
    [0.00000000031, 0.76672410297, 22779.6810636773],
    [0.00000000028, 4.07975589699, 2942.7072407751],
    [0.00000000028, 2.36060849192, 5429.63565075589],
    [0.00000000027, 4.04275590321, 11014.8626598513],
    [0.00000000027, 2.11023646997, 9623.9320941747],
    [0.00000000025, 1.72579553961, 18209.5740811437],
    [0.00000000026, 2.55064187749, 9381.2034902007],
    [0.00000000025, 2.68812943588, 3583.5848481573],
    [0.0000000003, 5.98905764002, 10447.6316570879],
    [0.00000000032, 4.08880306095, 796.0541893329],
    [0.00000000023, 6.09814489767, 9917.45305702629],
    [0.00000000026, 0.90493478768, 12012.8261146239],
    [0.00000000024, 1.88327707702, 14143.2514249471],
    [0.00000000023, 2.2672722651, 26709.8907598969],
    [0.00000000021, 3.868951978, 7632.6994421667],
    [0.00000000021, 2.37138453193, 17256.8753538249],
    [0.00000000028, 1.07450535792, 12353.0964220283],
    [0.00000000022, 4.83463880427, 77714.015285604],
    [0.00000000021, 5.98744320172, 6993.2527160332],
    [0.0000000002, 0.31265663265, 6836.40143535029],
    [0.0000000002, 5.44332565028, 1748.2602305505],
    [0.00000000026, 2.02675372626, 9225.7830907665],
    [0.00000000023, 0.80832702606, 149854.6439522914],
    [0.00000000026, 5.31358634432, 2544.07060239989],
    [0.00000000018, 2.28255799994, 11614.6771112157],
    [0.0000000002, 4.61413285151, 426.8420083595],
    [0.00000000019, 3.66100662326, 30640.1004561165],
    [0.00000000018, 4.7779464912, 155.6642169177],
    [0.00000000018, 1.89582517195, 11926.4982311523],
    [0.00000000022, 3.74943338657, 17298.4261448097],
    [0.00000000019, 3.25511318252, 18073.46112116669],
    [0.0000000002, 2.60030261119, 19651.2922985815],
    [0.00000000024, 1.57388276311, 5856.23384163189],
    [0.00000000023, 4.78368329384, 72850.8055327292],
    [0.00000000017, 3.95703430839, 8983.0544867925],
    [0.00000000016, 5.1706919569, 16460.5773470085],
    [0.00000000016, 1.2009964456, 17259.91083720689],
    [0.00000000021, 3.7736655876, 16858.7263504167],
    [0.0000000002, 0.39427566601, 23543.4743221653],
    [0.00000000021, 3.7944569612, 13367.7288136231],
    [0.0000000002, 4.04662298246, 2146.4092339587],
    [0.00000000014, 0.14269366851, 22484.0923919761],
    [0.00000000014, 4.66600220934, 16200.52890701769],
    [0.00000000015, 4.21847977142, 20199.3387771165],
    [0.00000000019, 2.8142048444, 8672.21368792411],
    [0.00000000019, 4.46915157584, 18073.9487561337],
    [0.00000000013, 4.71429939378, 16201.0165419847],
    [0.00000000017, 1.38925168648, 7860.17557495569],
    [0.00000000013, 4.69427401677, 18451.3223640495],
    [0.00000000016, 3.33196861521, 5572.8989839496],
    [0.00000000012, 2.70989366066, 17996.2749857057],
    [0.00000000012, 0.72221452149, 19403.0407703001],
    [0.00000000012, 5.53894834507, 14945.0723560709],
    [0.00000000015, 2.04879024946, 12559.2819704655],
    [0.00000000012, 4.37879205675, 10818.3791043993],
    [0.00000000015, 0.57625721169, 12567.37583853451],
    [0.00000000011, 1.78471307843, 28767.1682419675],
    [0.00000000013, 1.09547571668, 90280.1669855868],
    [0.00000000011, 5.02230424673, 22805.4917485101],
    [0.00000000011, 2.24605985689, 35372.1310834599],
    [0.0000000001, 6.26009139838, 11506.52595231009],
    [0.00000000014, 1.93802583909, 21228.63584102931],
    [0.0000000001, 0.13064402023, 12779.6946129043],
    [0.0000000001, 6.05309072952, 23141.8022004081],
    [0.0000000001, 1.18002886182, 1350.1112271423],
    [0.0000000001, 2.50762435685, 10575.1628654583],
    [0.0000000001, 2.55643759758, 22345.5041935917],
    [0.0000000001, 5.33273079625, 9778.8648586419],
    [0.00000000009, 1.49151911226, 29826.5501721567],
    [0.0000000001, 4.24000912367, 23581.5019948011],
    [0.00000000011, 0.39610887139, 25158.8455372489],
];

const X3: &[Term] = &[
    [0.0000023279, 3.40634928966, 0.2438174835],
    [0.00000076843, 2.52439403387, 12566.3955174663],
    [0.00000035331, 3.34616699853, 6283.3196674749],
    [0.00000005282, 2.40489818589, 18849.4713674577],
    [0.00000001631, 5.43859760597, 6282.83203250789],
    [0.00000001483, 2.22678849266, 6438.7400669091],
    [0.00000001479, 4.40151760084, 6127.8992680407],
    [0.00000000652, 4.70876083993, 6279.7965491259],
    [0.00000000656, 1.58695055624, 6286.84278582391],
    [0.00000000317, 3.00237328519, 6526.04827144891],
    [0.00000000318, 3.63024148359, 6040.5910635009],
    [0.00000000227, 2.27961613476, 25132.5472174491],
    [0.00000000201, 0.81376672334, 6836.8890703173],
    [0.00000000201, 5.8064290051, 5729.7502646325],
    [0.00000000036, 1.33765000112, 12569.91863581531],
    [0.00000000034, 1.93992455025, 4705.9761250271],
    [0.00000000033, 4.22745351005, 12410.9751180321],
    [0.00000000032, 5.38348719867, 6257.0213476751],
    [0.00000000032, 4.41212819179, 6309.61798727471],
    [0.00000000026, 0.50334838608, 775.7664288075],
    [0.00000000023, 2.01776542272, 1059.6257476727],
    [0.00000000025, 1.5840599004, 7860.6632099227],
    [0.00000000027, 5.17969059866, 12565.9078824993],
    [0.0000000002, 3.76292921295, 5753.6287023803],
    [0.00000000019, 3.01515389134, 5885.1706640667],
    [0.00000000019, 6.05056350877, 6813.0106325695],
    [0.00000000018, 2.29290644779, 12721.8159169005],
    [0.00000000017, 0.49235818139, 6681.46867088311],
    [0.00000000013, 4.49557806784, 5487.0216606585],
    [0.00000000011, 5.29141894629, 7079.61767429131],
    [0.0000000001, 4.46246654504, 5507.7970561509],
    [0.0000000001, 3.03842434664, 11790.8729061423],
    [0.00000000009, 1.50545167256, 11507.0135872771],
    [0.00000000011, 6.25880735981, 12592.6938372661],
    [0.00000000009, 5.39258795934, 7058.8422787989],
    [0.00000000008, 1.26531983919, 6290.4332144757],
    [0.00000000008, 2.25393064493, 6276.2061204741],
    [0.00000000008, 3.03070423945, 796.5418242999],
    [0.00000000007, 2.58386169059, 4693.75913722409],
    [0.00000000007, 1.92157668691, 7.3573644843],
    [0.00000000005, 4.86563371701, 3739.0052475915],
    [0.00000000005, 6.21240311845, 6070.0205720369],
    [0.00000000006, 3.95562930301, 6284.2999885431],
    [0.00000000006, 5.83931193332, 6282.3393464067],
    [0.00000000005, 3.46747665337, 4137.1542509997],
    [0.00000000005, 3.58293336989, 6496.6187629129],
];

const X4: &[Term] = &[
    [0.00000114918, 0.06053023506, 6283.3196674749],
    [0.00000006817, 4.47624663983, 0.2438174835],
    [0.00000003158, 0.47910545815, 12566.3955174663],
    [0.00000000211, 3.72351646714, 6438.7400669091],
    [0.0000000021, 2.88489921647, 6127.8992680407],
    [0.00000000253, 0.64665875683, 18849.4713674577],
    [0.00000000073, 3.92376796583, 6282.83203250789],
    [0.00000000042, 4.60322795936, 710.1768660418],
    [0.00000000023, 6.04513529243, 6279.7965491259],
    [0.00000000022, 6.04140763882, 6286.84278582391],
    [0.00000000012, 0.51640078868, 25132.5472174491],
    [0.00000000009, 4.2100805556, 83997.09113559539],
    [0.00000000009, 5.19392488383, 11856.462468908],
    [0.00000000008, 6.16587249238, 167284.005405149],
    [0.00000000005, 5.9791399691, 6257.0213476751],
    [0.00000000005, 3.78878463461, 6309.61798727471],
    [0.00000000005, 2.68915538708, 12410.9751180321],
    [0.00000000005, 5.56850457487, 156137.71980228278],
    [0.00000000004, 3.40118346072, 12565.9078824993],
    [0.00000000003, 5.17221494066, 529.9347825781],
];

const X5: &[Term] = &[
    [0.00000000877, 0.16136296068, 6283.3196674749],
    [0.00000000305, 5.62973274927, 0.2438174835],
    [0.00000000101, 4.88076699149, 12566.3955174663],
    [0.00000000025, 5.30593958386, 6438.7400669091],
    [0.00000000025, 1.27879113841, 6127.8992680407],
    [0.0000000001, 5.11399286577, 18849.4713674577],
    [0.00000000003, 2.56205735968, 6282.83203250789],
];

const Y0: &[Term] = &[
    [0.99986069925, 0.18267413078, 6283.3196674749],
    [0.02506324281, 3.36739796418, 0.2438174835],
    [0.00835274807, 0.13953892859, 12566.3955174663],
    [0.00010466796, 0.0964235154, 18849.4713674577],
    [0.00003490608, 6.0145343591, 6282.83203250789],
    [0.00003110838, 5.38114087369, 83997.09113559539],
    [0.00002561408, 5.29827505528, 529.9347825781],
    [0.00002142365, 2.66284107563, 1577.0997249643],
    [0.00001709161, 5.20779761275, 6279.7965491259],
    [0.00001707934, 4.58234386738, 6286.84278582391],
    [0.00001442753, 1.90130765657, 2353.1099712553],
    [0.00001113027, 5.26701283158, 5223.4501023187],
    [0.00000934484, 4.50305745607, 12036.7045523717],
    [0.00000899854, 1.60527831001, 10213.5293636945],
    [0.0000056682, 0.58162314212, 1059.6257476727],
    [0.00000661858, 6.02414120157, 5753.6287023803],
    [0.00000739644, 2.79582891432, 398.3928208917],
    [0.00000681381, 0.6473576526, 4705.9761250271],
    [0.00000611293, 3.81390547656, 6813.0106325695],
    [0.00000451129, 4.52236258525, 5885.1706640667],
    [0.00000451985, 5.99169934357, 6257.0213476751],
    [0.00000449743, 3.79862296384, 6309.61798727471],
    [0.00000406291, 5.25608267423, 6681.46867088311],
    [0.00000541115, 5.49909532338, 775.7664288075],
    [0.00000546682, 6.17348361999, 14143.7390599141],
    [0.0000051378, 2.86615405111, 7860.6632099227],
    [0.00000263916, 3.8247211995, 5507.7970561509],
    [0.0000021722, 2.94186064336, 11507.0135872771],
    [0.00000292146, 4.0845198998, 5507.3094211839],
    [0.00000227915, 5.95179814771, 7058.8422787989],
    [0.00000226835, 4.84435977688, 4693.75913722409],
    [0.00000255833, 0.69465437518, 12168.2465140581],
    [0.00000256157, 6.16717762843, 710.1768660418],
    [0.00000178679, 1.39565997429, 796.5418242999],
    [0.00000178303, 5.11711459804, 6283.25235717211],
    [0.00000178303, 4.6730116282, 6283.3869777777],
    [0.00000155471, 0.05335100564, 25132.5472174491],
    [0.00000155246, 6.13208007594, 5487.0216606585],
    [0.0000020764, 4.28246516283, 11790.8729061423],
    [0.00000199988, 2.5013719743, 17790.08943726851],
    [0.0000012897, 3.64618696457, 7079.61767429131],
    [0.00000128155, 3.23179068571, 3739.0052475915],
    [0.00000152241, 5.58140597212, 213.5429129215],
    [0.00000078109, 0.27810887092, 8827.6340873583],
    [0.00000073503, 1.12438065243, 1589.3167127673],
    [0.00000093001, 5.50857519732, 9437.5191174035],
    [0.00000065526, 2.08488700481, 11770.0975106499],
    [0.0000006324, 0.67044494917, 6262.5442719825],
    [0.00000062961, 2.83649752628, 6304.0950629673],
    [0.0000008587, 1.45351146305, 167284.005405149],
    [0.00000083233, 4.62701145755, 3340.8562441833],
    [0.0000006285, 0.46743502764, 7.3573644843],
    [0.00000079971, 0.92256149872, 6070.0205720369],
    [0.00000060043, 1.82875530765, 4137.1542509997],
    [0.00000075613, 2.58868557323, 6496.6187629129],
    [0.00000053731, 6.27507790078, 1194.6908277081],
    [0.00000057574, 2.39891957636, 6284.2999885431],
    [0.00000057574, 1.1080213427, 6282.3393464067],
    [0.00000072385, 0.13875968847, 10976.83498721549],
    [0.00000051135, 6.02476231374, 6290.4332144757],
    [0.00000050604, 3.77440441934, 6276.2061204741],
    [0.00000049613, 1.07290414466, 6127.8992680407],
    [0.00000048009, 2.4349225284, 6438.7400669091],
    [0.00000059233, 5.35402385929, 3154.4432674121],
    [0.00000048264, 0.05887245943, 801.5771136403],
    [0.00000047368, 4.53616745806, 3128.6325825793],
    [0.00000039225, 1.68202291816, 8429.4850839501],
    [0.00000051307, 4.21369114598, 12353.0964220283],
    [0.00000050639, 0.48135592944, 11856.462468908],
    [0.00000039555, 3.35943021943, 5481.4987363511],
    [0.00000042757, 2.06983819322, 17260.3984721739],
    [0.00000048941, 5.16594049812, 9225.7830907665],
    [0.00000048302, 2.17445966751, 2544.07060239989],
    [0.00000037971, 1.47013374285, 426.8420083595],
    [0.00000043643, 4.71767697827, 5856.23384163189],
    [0.0000003183, 3.57964760085, 2145.92159899169],
    [0.00000033959, 0.15150934422, 7085.1405985987],
    [0.00000030184, 2.39802729198, 10977.32262218251],
    [0.00000032562, 4.41726666203, 4164.0681721295],
    [0.00000038887, 0.64783670316, 13367.7288136231],
    [0.00000028515, 4.53853388778, 12569.91863581531],
    [0.00000028873, 5.72467865653, 3930.4535137031],
    [0.00000036633, 1.33719170745, 18073.9487561337],
    [0.00000024984, 3.74998709416, 26.0545023163],
    [0.00000026364, 5.25860499861, 9438.0067523705],
    [0.00000030326, 0.42292659979, 4535.3032544079],
    [0.00000028166, 5.193662231, 12562.8723991173],
    [0.00000028001, 1.25523598395, 5088.8726572503],
    [0.00000021157, 3.50176956898, 11371.9485072417],
    [0.00000023113, 5.57235828208, 5223.93773728571],
    [0.00000021642, 3.06444525139, 12559.2819704655],
    [0.00000019448, 5.97216607301, 12565.9078824993],
    [0.00000026055, 1.87419996146, 71430.45180064559],
    [0.00000018232, 4.98441727809, 1747.7725955835],
    [0.00000023248, 4.61930360205, 18319.7804023631],
    [0.00000022785, 2.73901481639, 5753.14106741329],
    [0.00000017091, 5.29823070971, 4933.4522578161],
    [0.00000019399, 6.00268090156, 10447.14402212089],
    [0.00000021067, 2.22953967314, 7477.7666776995],
    [0.0000002131, 3.08840298987, 8031.3360805419],
    [0.00000014189, 6.02227444325, 2942.7072407751],
    [0.00000013864, 3.0227098864, 8636.18582124671],
    [0.00000018884, 0.85614785764, 156137.71980228278],
    [0.00000017875, 4.86899529635, 1592.8398311163],
    [0.00000018602, 2.07103958699, 17297.9385098427],
    [0.00000013605, 3.62641283985, 13096.0864825609],
    [0.00000015064, 1.5506840567, 16496.6052136859],
    [0.00000012969, 4.49412072551, 7633.1870771337],
    [0.00000014403, 6.14964820819, 20426.8149099055],
    [0.00000013311, 2.03652540541, 12139.7973265903],
    [0.00000013645, 3.57902352159, 13368.2164485901],
    [0.00000011583, 3.88983863974, 5331.6012612243],
    [0.00000011405, 5.97095658034, 529.44714761109],
    [0.00000015057, 0.5019517339, 7084.6529636317],
    [0.0000001433, 4.4569550764, 7342.7015976641],
    [0.00000012375, 1.53862290035, 6279.72923882311],
    [0.00000012366, 1.96831814313, 6286.9100961267],
    [0.00000010016, 3.81622500644, 397.9051859247],
    [0.00000012435, 5.77865382585, 15110.7099373497],
    [0.00000009513, 5.90294963286, 7235.0380737255],
    [0.00000010997, 0.62118771904, 10989.0519750185],
    [0.00000011583, 2.48171191864, 5729.7502646325],
    [0.00000009034, 3.85796197835, 9623.9320941747],
    [0.00000011842, 2.59877813496, 15721.0826023619],
    [0.00000008869, 3.47611287212, 6148.2545874395],
    [0.00000008614, 0.03081566771, 6418.38474751031],
    [0.00000010312, 1.02710009735, 6836.8890703173],
    [0.00000008411, 0.87289239606, 14712.5609339415],
    [0.00000007911, 1.58349090213, 2119.00767786191],
    [0.00000010379, 0.10632075985, 1349.62359217529],
    [0.00000010374, 3.97648848184, 5486.53402569149],
    [0.0000001048, 1.38209289015, 5999.4603486097],
    [0.00000007404, 3.8433941719, 6040.5910635009],
    [0.00000007357, 5.40136984638, 5088.3850222833],
    [0.0000000982, 2.12476608355, 6567.1789863401],
    [0.00000007018, 5.94659139192, 6526.04827144891],
    [0.00000009668, 3.49318502073, 21228.1482060623],
    [0.00000007545, 5.94843445846, 12540.0971976665],
    [0.00000007202, 4.31311905021, 6245.2919948391],
    [0.00000007144, 5.47703554612, 6321.3473401107],
    [0.00000008883, 5.46710407546, 5642.93474619389],
    [0.00000006626, 5.41362465894, 5327.7199258663],
    [0.00000007015, 5.70701993379, 7860.17557495569],
    [0.00000006159, 5.65831198505, 12964.5445208745],
    [0.00000007413, 3.46419092567, 23543.4743221653],
    [0.00000006355, 3.46461466453, 1990.9888345245],
    [0.00000007286, 2.01139981548, 537.0483295789],
    [0.00000006314, 1.51246730786, 951.4745887671],
    [0.00000006257, 2.66128485006, 4690.7236538421],
    [0.00000006484, 1.63733658639, 16730.70750707931],
    [0.00000005803, 1.38237252918, 955.3559241251],
    [0.00000006391, 2.40521894071, 24073.1652872599],
    [0.0000000753, 4.91537693059, 10973.7995038335],
    [0.00000006921, 5.41208599854, 522.8212355773],
    [0.00000007626, 2.72257180334, 22004.1584523533],
    [0.00000007531, 1.943848114, 18422.8731765817],
    [0.00000006902, 4.32614260011, 155.17658195069],
    [0.00000005434, 4.37546348368, 7238.9194090835],
    [0.00000006223, 0.67316616422, 18451.3223640495],
    [0.00000007296, 1.27743142232, 16730.21987211229],
    [0.00000005833, 0.75851095819, 640.1411037975],
    [0.00000007171, 1.43520696239, 3929.96587873609],
    [0.00000006251, 0.62294633745, 6277.7967431675],
    [0.00000006251, 2.88399458161, 6288.8425917823],
    [0.00000005683, 1.92473239272, 1551.2890401315],
    [0.00000006383, 2.21747129905, 5216.33655531789],
    [0.00000006194, 5.13602240936, 5230.5636493195],
    [0.00000005036, 2.26614918626, 14314.4119305333],
    [0.00000006774, 3.56437941703, 102.84895673509],
    [0.00000006224, 1.92311046214, 11014.8626598513],
    [0.00000004621, 2.91747769543, 553.32558535889],
    [0.00000006293, 0.74955598933, 5650.5359281617],
    [0.00000006297, 2.83090961174, 26088.1469590577],
    [0.00000005186, 5.42426212805, 77714.015285604],
    [0.00000006196, 4.15785490016, 84672.2320270212],
    [0.0000000616, 3.21170376619, 239424.6340718364],
    [0.00000005414, 1.428823252, 6180.2268932563],
    [0.00000005413, 2.08335586272, 6386.4124416935],
    [0.00000004863, 2.19642727179, 90280.1669855868],
    [0.00000005711, 2.75632617612, 6916.1034067881],
    [0.0000000515, 2.53503851142, 1577.5873599313],
    [0.00000004269, 0.81279132183, 7875.91568110771],
    [0.00000004017, 2.21501270421, 6254.8704800071],
    [0.00000004069, 3.99136293444, 3634.37720703489],
    [0.00000003993, 1.29192496097, 6311.7688549427],
    [0.00000004016, 0.52802181166, 4690.23601887509],
    [0.0000000529, 4.91562568689, 25158.3579022819],
    [0.00000004831, 1.26836887601, 5760.7422493811],
    [0.00000003487, 1.93988497026, 10447.6316570879],
    [0.0000000412, 1.72576404553, 6709.91785835091],
    [0.0000000441, 2.23510306717, 6805.89708556871],
    [0.00000004023, 1.51236080833, 4731.7868098599],
    [0.0000000398, 1.7485234348, 5856.7214765989],
    [0.00000003173, 3.62048518613, 1066.7392946735],
    [0.00000003293, 5.58717113537, 9917.45305702629],
    [0.00000002935, 2.10511347366, 12592.6938372661],
    [0.00000002979, 4.62987940723, 12566.4628277691],
    [0.0000000398, 5.90920652207, 13341.9181287903],
    [0.00000003892, 3.95491793455, 75.0254160508],
    [0.00000003042, 1.6234606112, 18053.1733606413],
    [0.00000003608, 4.03873145467, 6208.5380689076],
    [0.00000003721, 3.65024914006, 5966.9277978183],
    [0.00000003581, 5.75234129258, 6358.1012660422],
    [0.0000000288, 0.04145923446, 10575.6505004253],
    [0.00000002806, 2.64471981541, 5863.8350235997],
    [0.00000003626, 6.13871061291, 6599.7115371315],
    [0.00000002794, 0.98030293667, 8030.8484455749],
    [0.00000002729, 2.60239924444, 3.76693583251],
    [0.00000003625, 1.43112681156, 6020.2357441021],
    [0.00000003206, 3.7247672443, 11506.52595231009],
    [0.00000003556, 5.86027209236, 8428.9974489831],
    [0.00000002856, 1.76545510884, 12721.8159169005],
    [0.00000002611, 0.86182235214, 6702.8043113501],
    [0.00000002535, 0.01231069705, 31415.6230674405],
    [0.0000000352, 3.80906738831, 250570.9196747026],
    [0.00000003434, 2.07577291101, 6546.4035908477],
    [0.00000002572, 0.08592522543, 5884.68302909969],
    [0.00000002647, 5.39051905541, 2352.6223362883],
    [0.00000003026, 3.669984423, 13916.2629271251],
    [0.00000002378, 2.05754080989, 2389.1378379327],
    [0.00000002979, 5.07398237707, 12566.32820716351],
    [0.00000003082, 3.34593854945, 14945.0723560709],
    [0.00000002716, 1.49855756532, 12029.5910053709],
    [0.00000002215, 3.69564106529, 13362.6935242827],
    [0.00000003032, 0.05314931388, 29088.5675985015],
    [0.00000002421, 1.58246988642, 11015.3502948183],
    [0.00000002275, 4.38385659579, 6077.1341190377],
    [0.00000002466, 0.87928045349, 16200.52890701769],
    [0.00000002529, 4.37629498907, 12043.8180993725],
    [0.00000002015, 0.91352607152, 6262.96434807611],
    [0.00000002218, 5.40562909521, 6489.5052159121],
    [0.00000002005, 2.59344260095, 6303.6749868737],
    [0.0000000201, 5.68334625182, 4700.87268422489],
    [0.00000002641, 5.85354681494, 4590.6663630055],
    [0.00000002438, 4.55830572881, 149.8070146181],
    [0.00000001893, 5.69296362938, 6279.4383321169],
    [0.00000001893, 4.09716259686, 6287.2010028329],
    [0.00000002156, 0.43822603611, 18139.5383188994],
    [0.00000002071, 2.7509951173, 11926.4982311523],
    [0.00000002395, 4.8438725538, 1162.7185218913],
    [0.00000001954, 5.08514679694, 13518.1139237169],
    [0.00000002006, 5.02287213343, 3154.9309023791],
    [0.00000001776, 4.86094102925, 13521.9952590749],
    [0.00000001964, 1.8218278612, 4686.6455902233],
    [0.00000002332, 2.83569470692, 10022.0810975829],
    [0.00000001863, 3.6895097692, 242.97242145751],
    [0.00000001928, 3.02170818288, 5746.5151553795],
    [0.00000002436, 2.83691190801, 95143.3767384616],
    [0.00000002163, 6.13036805408, 6037.4880212455],
    [0.0000000225, 0.82649289984, 12669.4882916849],
    [0.00000002052, 3.65926976048, 6529.1513137043],
    [0.00000001886, 5.1829321732, 7238.4317741165],
    [0.0000000217, 3.92516942708, 19651.2922985815],
    [0.00000002058, 3.12741900385, 23013.7833570707],
    [0.00000001774, 0.51402656711, 6820.1241795703],
    [0.00000001841, 1.91732926338, 65147.37595065419],
    [0.00000001578, 4.07231752329, 4292.5746504339],
    [0.00000001577, 2.3785919187, 7632.6994421667],
    [0.00000001541, 0.23280184119, 13119.9649203087],
    [0.00000002012, 1.94074945567, 4292.0870154669],
    [0.00000001543, 5.39993967465, 6293.95633282471],
    [0.00000001543, 4.39018655159, 6272.6830021251],
    [0.00000001513, 2.22141523192, 20.5315780089],
    [0.00000001489, 1.38125902411, 110.45013870291],
    [0.00000001639, 2.86996469977, 17655.0243572331],
    [0.00000001443, 0.69249676813, 1052.51220067191],
    [0.00000001337, 1.49321921272, 2544.5582373669],
    [0.00000001797, 1.4741588746, 33018.7772947211],
    [0.00000001488, 4.10370894807, 76.50988875911],
    [0.00000001453, 3.88999021921, 633.0275567967],
    [0.00000001349, 4.18018116919, 6016.7126257531],
    [0.00000001477, 2.56925141669, 12779.6946129043],
    [0.00000001688, 4.77167367345, 18875.2820522905],
    [0.00000001491, 4.65894552032, 9411.7084325707],
    [0.00000001471, 4.18699607739, 18636.1722720197],
    [0.00000001263, 5.62967869388, 12573.5090644671],
    [0.00000001685, 4.1379795716, 25934.3681485729],
    [0.00000001375, 2.66006793362, 2378.9206560881],
    [0.00000001641, 1.56425462469, 6.86972951729],
    [0.000000012, 6.18795172265, 11499.9000402763],
    [0.00000001272, 5.60977811105, 6549.9267091967],
    [0.00000001214, 2.79740025979, 10973.3118688665],
    [0.00000001406, 0.96357897619, 11790.3852711753],
    [0.00000001524, 2.69987154893, 18209.5740811437],
    [0.00000001149, 1.4488207348, 10177.5014970171],
    [0.00000001547, 5.59995461433, 11926.01059618529],
    [0.0000000146, 3.40155505101, 246.0754637129],
    [0.00000001323, 2.95651083102, 8661.9965060795],
    [0.00000001252, 6.12405778157, 6993.2527160332],
    [0.00000001459, 3.72728247655, 38.3768531213],
    [0.00000001235, 1.27016887136, 24357.0246061251],
    [0.00000001028, 0.93950364612, 6112.6467968557],
    [0.0000000133, 5.71304625366, 2146.4092339587],
    [0.00000001312, 5.81330482072, 12491.613918899],
    [0.00000001246, 6.23510174757, 5429.63565075589],
    [0.00000000992, 2.56738111789, 6453.9925380941],
    [0.00000000988, 5.69208485871, 8274.0646845159],
    [0.00000001365, 1.39907964627, 11371.4608722747],
    [0.0000000102, 1.25240185088, 4732.2744448269],
    [0.00000001191, 1.85928407242, 6290.36590417291],
    [0.00000001191, 1.64765684663, 6276.2734307769],
    [0.00000000978, 3.16773125497, 6247.2918007975],
    [0.00000000971, 0.33921091467, 6319.34753415231],
    [0.00000000962, 1.06488912173, 12565.4151963981],
    [0.00000001025, 0.64688768472, 12545.6201219739],
    [0.0000000099, 5.10278829353, 4694.2467721911],
    [0.00000000964, 3.3627237261, 3893.93801205869],
    [0.00000000944, 4.29299913988, 6259.44122972711],
    [0.00000000944, 5.49712708636, 6307.1981052227],
    [0.00000001092, 2.34985569802, 17797.2029842693],
    [0.00000001132, 5.71867421008, 17782.9758902677],
    [0.00000000859, 6.19348487479, 1692.40948698591],
    [0.00000001213, 5.61315622766, 82576.73740351178],
    [0.00000000942, 3.6571110443, 6298.57213865991],
    [0.00000000942, 6.13301518193, 6268.0671962899],
    [0.00000001045, 5.17434482333, 15508.8589407579],
    [0.00000000851, 3.62598735241, 6173.1133462555],
    [0.0000000085, 6.16443178844, 6393.5259886943],
    [0.00000000895, 0.83009579073, 3904.1551939033],
    [0.0000000102, 5.42778314413, 220.6564599223],
    [0.00000000845, 4.18420138552, 17256.8753538249],
    [0.00000000863, 2.86079142045, 949.4194264533],
    [0.00000000853, 1.18534704592, 16201.0165419847],
    [0.00000000811, 1.42220880644, 4803.9654584435],
    [0.00000000966, 2.57517734766, 206.42936592071],
    [0.00000000917, 0.8992769645, 149854.6439522914],
    [0.00000001083, 2.89594427545, 36948.9869909407],
    [0.00000000779, 2.01260050316, 2648.6986429565],
    [0.00000000964, 2.34511297941, 796.0541893329],
    [0.00000000995, 4.96662237412, 11403.9208130585],
    [0.00000000962, 2.35578735539, 12567.37583853451],
    [0.00000000779, 2.02763029837, 10213.0417287275],
    [0.0000000098, 6.19670011124, 22805.4917485101],
    [0.0000000093, 0.65237052253, 2787.2868413409],
    [0.00000000829, 0.38404899643, 5120.35732810009],
    [0.00000000733, 4.18029489609, 10575.1628654583],
    [0.00000000743, 2.22826365578, 7834.3648901229],
    [0.00000000818, 3.21447961169, 5572.8989839496],
    [0.00000000905, 2.2445918366, 6284.8041401832],
    [0.00000000905, 1.26234908246, 6281.8351947666],
    [0.00000000798, 1.05421419226, 12410.9751180321],
    [0.00000000817, 5.23322400864, 12416.8323203317],
    [0.00000000884, 2.41399532496, 22483.60475700909],
    [0.00000000755, 5.40020688961, 4060.97539791089],
    [0.00000000651, 5.50763453832, 17259.91083720689],
    [0.00000000616, 4.1339481914, 1596.43025976811],
    [0.00000000651, 0.84412253043, 1748.2602305505],
    [0.00000000723, 1.49663741427, 161000.92955515758],
    [0.00000000784, 2.44837693578, 4907.05823266209],
    [0.00000000784, 3.77248887935, 7234.5504387585],
    [0.00000000785, 1.86574625348, 846.3266522347],
    [0.00000000611, 6.24391260854, 853.4401992355],
    [0.00000000576, 5.94037158869, 12323.6669134923],
    [0.0000000057, 2.97586328906, 12587.1709129587],
    [0.00000000576, 4.63987761174, 13915.77529215809],
    [0.0000000077, 0.89072554788, 6069.53293706989],
    [0.00000000773, 1.78442906238, 6133.2688353733],
    [0.00000000581, 6.05264641509, 11933.6117781531],
    [0.00000000719, 2.47920208822, 15720.5949673949],
    [0.00000000578, 2.69917567595, 8662.48414104651],
    [0.00000000536, 4.49580958272, 18852.9944858067],
    [0.00000000633, 5.88497258324, 52176.0501006319],
    [0.00000000581, 1.3571925661, 5334.1440585051],
    [0.00000000532, 3.01682546062, 18842.3578204569],
    [0.00000000657, 4.82951502701, 5849.1202946311],
    [0.00000000599, 0.54713597581, 6151.7777057885],
    [0.0000000054, 1.67333017022, 6286.6060248927],
    [0.0000000054, 1.83361074884, 6280.0333100571],
    [0.00000000628, 5.02906961003, 17298.4261448097],
    [0.00000000532, 2.84025435717, 11514.1271342779],
    [0.00000000513, 2.13211972766, 12456.1891962469],
    [0.00000000649, 3.33488996078, 11764.5745863425],
    [0.00000000582, 2.96012797214, 6414.8616291613],
    [0.00000000517, 5.63213604686, 3340.36860921629],
    [0.00000000609, 2.37414673548, 10420.23010099111],
    [0.00000000615, 0.00032066291, 10983.94853421629],
    [0.00000000622, 0.82619343851, 5326.5428765373],
    [0.00000000536, 2.13145334966, 7232.49527644471],
    [0.00000000516, 1.35907342509, 433.9555553603],
    [0.00000000613, 3.36175443914, 10969.72144021469],
    [0.00000000583, 1.44072369133, 5863.3473886327],
    [0.00000000636, 1.34803641207, 26735.7014447297],
    [0.00000000665, 4.3176206835, 40879.1966871603],
    [0.00000000583, 4.39404867767, 12592.2062022991],
    [0.00000000479, 6.04787718072, 5547.4431539431],
    [0.00000000571, 1.01593938825, 6062.9070250361],
    [0.00000000565, 5.49171831457, 4171.1817191303],
    [0.00000000462, 3.53710274271, 3104.6862419403],
    [0.00000000551, 2.4679479802, 6503.7323099137],
    [0.00000000504, 0.43308443375, 15670.83794192309],
    [0.00000000535, 4.55197610339, 173567.0812551404],
    [0.0000000046, 4.75481082956, 3495.78900865049],
    [0.00000000449, 0.38594751092, 4274.27449334889],
    [0.00000000453, 5.14645638415, 9387.76209193169],
    [0.00000000527, 4.67747505318, 24602.8562523545],
    [0.00000000502, 5.68646114706, 12490.1294461907],
    [0.00000000603, 5.5672596788, 322711.54834139],
    [0.00000000532, 0.26579545469, 5120.8449630671],
    [0.0000000053, 5.14730101928, 18845.9482491087],
    [0.00000000431, 3.7406631488, 7019.19618100671],
    [0.00000000465, 1.12060083942, 8827.14645239129],
    [0.00000000559, 0.1448124733, 1582.2031657665],
    [0.00000000485, 4.56530394374, 29296.8592070621],
    [0.00000000584, 4.78377689692, 72850.8055327292],
    [0.0000000055, 5.52640225498, 213.0552779545],
    [0.00000000481, 0.29866487122, 14.47091148511],
    [0.00000000569, 1.38161051216, 97238.871361971],
    [0.00000000551, 3.21618763564, 14313.9242955663],
    [0.00000000389, 1.85967717576, 6245.1866318371],
    [0.00000000389, 1.6472637433, 6321.4527031127],
    [0.00000000388, 5.85202122263, 6297.5467614765],
    [0.00000000388, 3.93810500361, 6269.0925734733],
    [0.00000000515, 0.09995632139, 12320.56387123691],
    [0.00000000394, 1.39198903052, 4156.95462512869],
    [0.00000000491, 4.39709251394, 1479.11039154791],
    [0.0000000044, 2.54396321518, 5650.0482931947],
    [0.00000000382, 1.50580912176, 9917.9406919933],
    [0.00000000503, 3.08687612414, 17157.3056979553],
    [0.00000000439, 3.25483236471, 233141.55822184499],
    [0.00000000381, 3.59564013891, 14143.2514249471],
    [0.00000000371, 3.01987537874, 5643.4223811609],
    [0.00000000516, 4.04344774561, 135.30889751891],
    [0.00000000417, 2.17381926869, 13760.8425276909],
    [0.00000000483, 2.84671280305, 9779.3524936089],
    [0.00000000381, 2.79871486639, 14919.2616712381],
    [0.00000000378, 2.94872717012, 17267.5120191747],
    [0.00000000393, 6.27917510634, 7872.39256275871],
    [0.00000000376, 6.02660735301, 13517.62628874989],
    [0.00000000365, 0.53940975175, 6923.2169537889],
    [0.00000000371, 4.19154046767, 13625.7774476555],
    [0.00000000355, 3.67238322579, 10874.2298479639],
    [0.00000000499, 1.15482974306, 161710.8626037159],
    [0.00000000379, 5.52860495919, 3185.43584474911],
    [0.00000000471, 0.07055813902, 11712.71150074729],
    [0.00000000417, 1.7599395901, 22779.6810636773],
    [0.00000000485, 6.0668309636, 12528.26248182851],
    [0.00000000358, 1.92035724848, 6295.0490203109],
    [0.00000000358, 1.58658367058, 6271.5903146389],
    [0.00000000365, 5.19130080276, 6836.40143535029],
    [0.00000000351, 0.64808198517, 11617.21990849651],
    [0.00000000351, 4.53436303138, 205.9417309537],
    [0.00000000429, 5.51029115203, 3894.4256470257],
    [0.00000000388, 5.2031895103, 956.53297345411],
    [0.00000000464, 5.40703775457, 23581.5019948011],
    [0.00000000396, 0.78828729228, 5231.0512842865],
    [0.00000000421, 3.2565981164, 7445.7943718827],
    [0.00000000366, 5.33851384127, 17253.2849251731],
    [0.0000000036, 5.53135776054, 21393.7857873411],
    [0.00000000336, 6.12569565789, 6279.3875142118],
    [0.00000000336, 3.66443056835, 6287.251820738],
    [0.00000000326, 0.22542241669, 1059.1381127057],
    [0.00000000395, 5.25182737341, 5642.4420600927],
    [0.0000000045, 1.80229899871, 1385.3177574676],
    [0.00000000363, 2.72535712612, 22484.0923919761],
    [0.00000000399, 5.51787738042, 16858.7263504167],
    [0.00000000316, 2.45995539098, 20995.6367839329],
    [0.0000000043, 3.96101117316, 19650.8046636145],
    [0.00000000363, 2.7199014567, 7335.5880506633],
    [0.00000000317, 3.09968934621, 11769.6098756829],
    [0.00000000395, 3.82348351794, 5905.94605955911],
    [0.00000000324, 5.27854205827, 37.7838551523],
    [0.00000000299, 2.29226668471, 641.12142486571],
    [0.00000000304, 4.87224846445, 5750.1055840313],
    [0.00000000298, 2.25684047934, 1350.1112271423],
    [0.00000000414, 5.74970236841, 44809.4063833799],
    [0.00000000339, 5.86256617398, 3.6883357796],
    [0.00000000351, 4.36315861783, 12345.9828750275],
    [0.00000000362, 1.99294614713, 21953.91379191449],
    [0.00000000304, 3.36735752668, 29826.5501721567],
    [0.00000000395, 4.78960869869, 4176.2851599325],
    [0.0000000032, 0.92821593891, 10818.3791043993],
    [0.00000000384, 5.5895190136, 10177.01386205009],
    [0.00000000279, 5.67648753585, 10970.2090751817],
    [0.00000000365, 5.96664259426, 6660.6932753907],
    [0.00000000377, 5.53753804163, 29864.5778447925],
    [0.00000000275, 4.16427905835, 20597.4877805247],
    [0.00000000316, 1.02608510804, 316.6356871401],
    [0.00000000339, 4.53749399958, 6924.1972748571],
    [0.00000000386, 0.71953202985, 2636.9692901205],
    [0.00000000273, 5.80758206821, 26709.8907598969],
    [0.00000000314, 6.18462887647, 14945.5599910379],
    [0.00000000281, 0.15414528977, 16858.23871544969],
    [0.00000000287, 4.8722991024, 18073.46112116669],
    [0.00000000265, 3.53930677592, 19379.1623325523],
    [0.00000000325, 0.92198404013, 12360.2099690291],
    [0.00000000362, 2.75236634018, 30665.9111409493],
    [0.00000000269, 4.91776126981, 6816.53375091851],
    [0.00000000344, 1.94480091531, 6147.69434246491],
    [0.00000000255, 3.37543976329, 1376.0176173293],
    [0.00000000334, 1.56223491581, 6418.9449924849],
    [0.00000000316, 3.97125698165, 6055.8435346859],
    [0.00000000283, 2.66015602247, 28287.2343023447],
    [0.00000000305, 5.83332121064, 16522.4158985187],
    [0.0000000027, 1.6229549985, 283.6155013817],
    [0.00000000243, 0.9760084106, 6255.9181113781],
    [0.00000000243, 2.53093250846, 6310.7212235717],
    [0.00000000296, 4.79138408835, 6129.5408569901],
    [0.00000000301, 5.8188693598, 6510.7958002639],
    [0.00000000329, 5.8692212194, 377.6174253993],
    [0.00000000267, 1.84931872641, 24705.9490265731],
    [0.00000000285, 0.93414937692, 5469.7693835151],
    [0.00000000286, 4.9988626273, 6437.0984779597],
    [0.00000000311, 1.63984256457, 11720.3126827151],
    [0.00000000319, 3.13980275142, 169379.5000286584],
    [0.00000000241, 4.5651896345, 632.5399218297],
    [0.00000000229, 5.72761357577, 1265.81129610991],
    [0.00000000235, 4.94058515466, 4487.57358878689],
    [0.00000000253, 2.08435720561, 4377.3672675675],
    [0.00000000277, 3.15798901317, 419.2408263917],
    [0.00000000234, 3.5549495263, 11713.1991357143],
    [0.00000000216, 0.302070439, 10454.25756912169],
    [0.00000000241, 3.87591164077, 103.3365917021],
    [0.00000000214, 0.52402082918, 2222.1004520805],
    [0.00000000213, 2.22358750694, 30356.2411372513],
    [0.0000000024, 4.14485134121, 6309.1303523077],
    [0.00000000212, 3.93716983669, 262.84010588929],
    [0.00000000259, 1.64646341991, 6283.56348495841],
    [0.00000000259, 1.86047749915, 6283.0758499914],
    [0.00000000222, 2.99868754607, 10440.03047512009],
    [0.00000000201, 0.39862703515, 5746.0275204125],
    [0.00000000274, 5.42466894469, 23581.0143598341],
    [0.00000000243, 2.57266886723, 7096.8699514347],
    [0.00000000234, 3.66617634256, 5573.3866189166],
    [0.00000000203, 1.57613060854, 16460.08971204149],
    [0.00000000246, 4.26574746801, 8672.21368792411],
    [0.00000000216, 3.35974562754, 5437.23683272371],
    [0.0000000021, 4.2541933879, 9381.2034902007],
    [0.00000000199, 5.64767313384, 11216.5281078075],
    [0.0000000027, 5.11258425974, 284.1031363487],
    [0.00000000207, 1.4954906172, 12562.80508881451],
    [0.00000000212, 0.1839197404, 7129.4025022261],
    [0.00000000269, 6.23907858108, 70755.31090921978],
    [0.00000000221, 4.97264401025, 77713.52765063698],
    [0.00000000225, 5.58708477402, 5635.8211991931],
    [0.00000000197, 4.93201648946, 14712.07329897449],
    [0.00000000192, 0.47501431186, 17272.1278250099],
    [0.00000000241, 3.52343193321, 15907.0079441661],
    [0.00000000261, 0.88974137342, 48739.6160795995],
    [0.00000000255, 2.10230203862, 6206.5659612323],
    [0.00000000256, 0.73069007306, 224.5886131854],
    [0.00000000182, 5.98997615944, 18848.98373249069],
    [0.0000000025, 2.67103598665, 5934.39524702691],
    [0.00000000196, 0.64831634218, 16460.5773470085],
    [0.00000000187, 0.04522363352, 22003.6708173863],
    [0.00000000229, 1.73812120333, 2942.21960580809],
    [0.00000000175, 3.8409426754, 11614.6771112157],
    [0.00000000187, 0.76186633809, 9778.8648586419],
    [0.00000000175, 6.15302938442, 3744.5835282543],
    [0.00000000241, 5.00033837792, 8390.3541750173],
    [0.00000000236, 0.4540567077, 1.7282901918],
    [0.00000000217, 3.45380390356, 17996.2749857057],
    [0.00000000173, 2.65478632822, 6275.71848550709],
    [0.00000000191, 4.70676649838, 394.86970254271],
    [0.00000000231, 4.17552456214, 34596.1208371689],
    [0.00000000169, 0.40140025709, 6438.2524319421],
    [0.00000000235, 5.04475734159, 17256.38771885789],
    [0.00000000188, 4.0258328276, 401.91593924071],
    [0.00000000217, 3.40363231104, 10984.4361691833],
    [0.0000000023, 0.83612775625, 6632.2440879229],
    [0.00000000208, 5.4329835298, 11087.5289434019],
    [0.00000000165, 0.80102915744, 743.23387801611],
    [0.00000000177, 0.01829077781, 4796.85191144269],
    [0.00000000208, 6.16123229814, 3097.64000524229],
    [0.00000000167, 2.40308314985, 5714.4977934475],
    [0.00000000198, 4.8381227703, 5539.8419719753],
    [0.00000000169, 2.16903380895, 12132.6837795895],
    [0.00000000214, 2.77137176457, 24492.6499311351],
    [0.00000000172, 5.97118942936, 6233.5626420031],
    [0.00000000172, 3.81893679688, 6333.0766929467],
    [0.00000000223, 3.42911214381, 266.85085920531],
    [0.00000000159, 2.33166453392, 13199.1792567795],
    [0.00000000219, 0.6956628517, 10344.05124790229],
    [0.00000000207, 1.92518585993, 12569.9859461181],
    [0.00000000176, 2.48119576594, 12012.8261146239],
    [0.0000000017, 4.4395990676, 6294.36536773881],
    [0.0000000017, 5.35052715864, 6272.273967211],
    [0.00000000205, 1.15927608909, 13119.47728534169],
    [0.00000000167, 3.97305893961, 17686.9966630499],
    [0.0000000021, 2.4525507347, 13521.50762410789],
    [0.00000000163, 6.18035129909, 802.0647486073],
    [0.00000000159, 0.13779660073, 5017.2645538815],
    [0.00000000148, 5.46314197385, 419.72846135871],
    [0.00000000165, 5.59205778351, 20199.3387771165],
    [0.00000000196, 5.15079536124, 33326.33491569069],
    [0.00000000146, 1.96564383477, 19800.7021387413],
    [0.00000000148, 1.10385783973, 6852.1415415023],
    [0.00000000146, 4.95120975616, 17370.6047933933],
    [0.00000000143, 5.56441247552, 5618.5636223449],
    [0.00000000142, 0.65902902155, 17654.5367222661],
    [0.0000000014, 5.93480456615, 2008.8013566425],
    [0.00000000153, 3.3682682707, 5436.7491977567],
    [0.00000000162, 5.27294659555, 775.2787938405],
    [0.00000000162, 3.21674523006, 12552.1684234647],
    [0.00000000143, 3.89298583971, 5010.1510068807],
    [0.00000000188, 2.11622447442, 28.6930049513],
    [0.00000000155, 4.58570766573, 11610.1063614957],
    [0.00000000174, 1.007257815, 20452.6255947383],
    [0.00000000179, 0.59168717373, 27511.2240560537],
    [0.00000000135, 4.79054860554, 12431.3304374309],
    [0.00000000164, 4.03840473864, 28767.1682419675],
    [0.00000000134, 3.87019546457, 16840.9138282987],
    [0.00000000174, 2.7067587912, 19805.0711090663],
    [0.00000000146, 6.27087503385, 12701.4605975017],
    [0.00000000137, 1.03021623583, 11.2895177474],
    [0.00000000167, 5.98298407227, 17473.6975676119],
    [0.00000000152, 2.62025173907, 16627.6147328607],
    [0.00000000124, 4.22571397919, 6948.0757126049],
    [0.00000000135, 4.95808633295, 3531.2844328163],
    [0.00000000172, 0.23022549161, 167959.1462965748],
    [0.00000000123, 0.49830220802, 23013.29572210369],
    [0.00000000122, 4.12184350213, 3583.5848481573],
    [0.0000000017, 6.16462326207, 333857.8339442562],
    [0.00000000155, 5.62824965405, 6058.48723680599],
    [0.0000000012, 5.90379805618, 12809.12412144031],
    [0.00000000141, 3.95455666878, 162420.7956522742],
    [0.0000000012, 4.26997270152, 12528.3678448305],
    [0.00000000123, 1.49653119992, 25933.8805136059],
    [0.00000000144, 3.70806542711, 95.7354097343],
    [0.00000000165, 2.31400541864, 52669.8257758191],
    [0.00000000119, 5.90934736896, 19247.6203708659],
    [0.00000000117, 5.45034774436, 11610.7957758577],
    [0.00000000163, 1.54456737879, 661.4767442645],
    [0.00000000163, 2.78769461236, 9929.6700448293],
    [0.00000000119, 2.71628583938, 12250.0036478097],
    [0.00000000145, 2.33523694188, 6205.6458970469],
    [0.00000000145, 1.17170397718, 6360.99343790291],
    [0.00000000159, 2.61434005227, 228278.3484689702],
    [0.00000000114, 3.41169068642, 19402.55313533309],
    [0.00000000147, 5.63174103655, 38526.3305333885],
    [0.00000000156, 1.00709118546, 4307.8271216189],
    [0.00000000131, 0.13588364911, 21228.63584102931],
    [0.00000000118, 3.83848144749, 6263.64990657511],
    [0.00000000118, 5.95164477875, 6302.9894283747],
    [0.00000000137, 0.97335445483, 6315.8522182663],
    [0.00000000137, 2.53358646423, 6250.7871166835],
    [0.00000000109, 1.1964461813, 11925.5179100841],
    [0.00000000111, 2.80331366377, 6226.4212925393],
    [0.00000000111, 0.70362725529, 6340.2180424105],
    [0.00000000123, 0.80537647876, 24734.3982140409],
    [0.00000000107, 0.59542543867, 12463.30274324771],
    [0.00000000133, 1.4598651944, 18875.76968725751],
    [0.00000000123, 4.07179306364, 6260.5444660241],
    [0.00000000123, 5.71833316259, 6306.09486892571],
    [0.00000000113, 0.38322617607, 2111.8941308611],
    [0.00000000131, 2.04114030865, 18415.7596295809],
    [0.0000000011, 0.19106597205, 6289.94822637491],
    [0.0000000011, 3.31587494701, 6276.69110857489],
    [0.00000000103, 2.3196417272, 6241.7688764901],
    [0.00000000103, 1.18729919186, 6324.8704584597],
    [0.00000000113, 0.63409757277, 3496.2766436175],
    [0.00000000103, 3.00856574797, 10344.5388828693],
    [0.00000000115, 1.0979644722, 24336.2492106327],
    [0.00000000107, 0.149478717, 83974.0791732134],
    [0.00000000107, 1.1880299379, 84020.1030979774],
    [0.00000000106, 1.7060101934, 12772.58106590351],
    [0.00000000143, 6.22463763653, 2069.2506523901],
    [0.00000000143, 5.63223127595, 18773.2052961821],
    [0.00000000115, 5.35405637827, 3641.4907540357],
    [0.00000000112, 1.02603600816, 11499.41240530929],
    [0.00000000099, 0.21940282455, 11190.6217176205],
    [0.00000000126, 5.90533164276, 18823.1730476579],
    [0.00000000115, 3.09464836385, 12570.3276707294],
    [0.000000001, 1.95823440417, 16062.4283436003],
    [0.00000000107, 2.45486702592, 5216.8241902849],
    [0.0000000012, 0.25356721797, 9814.36028280769],
    [0.00000000138, 2.98838673165, 6210.0225416159],
    [0.00000000138, 0.51855418741, 6356.6167933339],
    [0.00000000105, 2.60431357489, 12721.32828193349],
    [0.00000000135, 5.28295396943, 18699.9081703231],
    [0.00000000104, 0.57981411648, 12560.8725931589],
    [0.00000000098, 4.00435005538, 5815.3546771205],
    [0.00000000111, 5.54435587296, 10239.3400485273],
    [0.000000001, 2.98744963581, 263.3277408563],
    [0.00000000095, 0.17662269567, 155.6642169177],
    [0.0000000013, 0.55194216539, 27511.7116910207],
    [0.0000000012, 1.84949333794, 31441.4337522733],
    [0.00000000114, 2.18292460802, 6155.3008241375],
    [0.00000000114, 1.32401631104, 6411.3385108123],
    [0.00000000119, 3.64842963894, 951.9622237341],
    [0.00000000117, 3.47158263266, 28236.98964190589],
    [0.00000000107, 0.33835239167, 21.0192129759],
    [0.00000000095, 4.0622835917, 11300.8280388399],
    [0.0000000011, 1.22040625314, 6312.74917601091],
    [0.0000000011, 2.28653466592, 6253.8901589389],
    [0.00000000097, 2.64989366154, 78263.95324220609],
    [0.00000000095, 4.41295990485, 23938.1002072245],
    [0.00000000091, 1.42377843647, 12829.4794408391],
    [0.00000000112, 2.74085534623, 16737.8210540801],
    [0.00000000126, 4.67942071523, 3.2793008655],
    [0.000000001, 1.46206803081, 6133.7564703403],
    [0.00000000127, 0.70264556724, 1293.24040609909],
    [0.00000000119, 4.42085627054, 17893.1822114871],
    [0.00000000089, 6.04696991631, 23539.9512038163],
    [0.00000000126, 4.96989590925, 311565.2627385237],
    [0.00000000093, 4.1051940064, 736.1203310153],
    [0.0000000012, 0.51718078841, 14158.9915310991],
    [0.00000000118, 3.00291998094, 16061.94070863329],
    [0.00000000099, 2.04878528903, 6432.8828646095],
    [0.00000000095, 1.28476695157, 2699.49100183409],
    [0.00000000089, 0.73014646335, 15671.3255768901],
    [0.00000000124, 5.19246908636, 178430.2910080152],
    [0.00000000089, 5.78577582542, 6751.28465782931],
    [0.00000000096, 1.07414401415, 7349.81514466491],
    [0.00000000096, 5.45460641914, 24066.0517402591],
    [0.00000000103, 2.80667748337, 18202.4605341429],
    [0.00000000099, 4.49603988169, 6252.40554183991],
    [0.00000000099, 5.29408634455, 6314.2337931099],
    [0.0000000009, 1.96044978655, 58864.30010066279],
    [0.00000000086, 2.1691077424, 9380.71585523369],
    [0.00000000086, 2.50989174885, 10557.35034334029],
    [0.00000000098, 1.84392439378, 6439.7203879773],
    [0.00000000098, 1.66301652528, 6126.91894697251],
    [0.00000000086, 6.05387198611, 23123.9896782901],
    [0.00000000118, 2.167647267, 13951.9570924174],
    [0.00000000117, 2.53823002855, 89570.23393702849],
    [0.00000000083, 4.7121327819, 8858.0711268371],
    [0.00000000092, 2.44147365747, 12342.0507217644],
    [0.00000000085, 0.72336255749, 5017.7521888485],
    [0.00000000101, 4.94259233986, 18429.9867235825],
    [0.00000000088, 2.19664804056, 17054.2129237367],
    [0.00000000113, 0.47970289838, 12985.88016134151],
    [0.00000000083, 2.47657261289, 20597.0001455577],
    [0.00000000082, 4.90614394615, 5483.4985423095],
    [0.00000000087, 1.67775805144, 21424.2228268199],
    [0.00000000107, 3.78836692146, 522.3336006103],
    [0.00000000084, 0.84028318953, 6187.3404402571],
    [0.00000000084, 2.66665772953, 6379.2988946927],
    [0.00000000107, 2.45229388212, 24382.8352909579],
    [0.00000000082, 5.66196525445, 8983.0544867925],
    [0.00000000105, 2.30294939014, 6131.4223863897],
    [0.00000000105, 1.20399152892, 6435.2169485601],
    [0.00000000114, 2.50001149568, 8258.81221333091],
    [0.00000000082, 5.40031574607, 3957.8826236923],
    [0.00000000112, 4.27968226719, 3738.51761262449],
    [0.00000000102, 1.32703960779, 5767.8557963819],
    [0.00000000102, 2.17990131127, 6798.7835385679],
    [0.00000000092, 6.06909982221, 18216.6876281445],
    [0.00000000083, 2.92326536483, 29864.0902098255],
    [0.00000000112, 3.91825505548, 12189.0219095505],
    [0.0000000008, 2.01989715959, 24080.2788342607],
    [0.0000000008, 0.09553378894, 15141.14697682849],
    [0.00000000088, 4.57487416308, 1573.57660661529],
    [0.00000000081, 5.29168357177, 1550.8014051645],
    [0.00000000092, 2.79378764615, 101426.452588453],
    [0.0000000011, 5.08245905369, 78423.9483341623],
    [0.00000000087, 3.89276904283, 1580.6228433133],
    [0.00000000085, 1.43001232077, 27043.2590656993],
    [0.00000000078, 3.02198277867, 6812.5229976025],
    [0.0000000008, 1.79867193339, 6081.06627230081],
    [0.0000000008, 1.70826898567, 6485.573062649],
    [0.00000000079, 2.9673685588, 36109.6260221481],
    [0.00000000088, 5.58307910278, 16944.0066025173],
    [0.00000000081, 2.98944824758, 5.2791068239],
    [0.00000000093, 1.14380332092, 16737.33341911309],
    [0.00000000088, 1.678216318, 12537.9463299985],
    [0.00000000096, 0.48155847774, 20198.85114214949],
    [0.00000000106, 3.73745326901, 56600.0354720387],
    [0.00000000097, 1.71169429599, 6040.10342853389],
    [0.00000000081, 5.19219909829, 3956.2641985359],
    [0.00000000077, 6.10587791973, 40796.5827401577],
    [0.00000000076, 3.78044498975, 22743.16556203289],
    [0.00000000098, 0.77646852784, 42456.5402296081],
    [0.00000000083, 0.63561076928, 19801.1897737083],
    [0.00000000079, 2.93697401198, 5622.08674069391],
    [0.00000000096, 0.4141822589, 5888.6937824157],
    [0.00000000096, 3.09275866016, 6677.9455525341],
    [0.00000000075, 4.66945944657, 41194.7317435659],
    [0.00000000074, 5.37967983395, 6261.9840270079],
    [0.00000000074, 4.41044639229, 6304.6553079419],
    [0.00000000073, 2.45644384945, 5870.9485706005],
    [0.00000000073, 1.05049706961, 6695.6907643493],
    [0.00000000085, 2.08161902252, 12850.2548363315],
    [0.00000000072, 4.75417028947, 6253.4982293261],
    [0.00000000072, 5.03595593677, 6313.14110562371],
    [0.000000001, 3.80714894085, 5316.3487900393],
    [0.00000000085, 1.33904345426, 12282.5361986011],
    [0.00000000075, 0.39510472937, 24422.6141688908],
    [0.00000000076, 0.41148054527, 63659.1215683211],
    [0.00000000072, 4.97177288715, 16723.5939600785],
    [0.00000000097, 0.21179463686, 17995.78735073869],
    [0.00000000087, 2.06337614338, 18106.4813069251],
    [0.0000000008, 3.60508005382, 17363.4912463925],
    [0.0000000007, 3.06053136401, 6124.37614969171],
    [0.0000000007, 0.44640955505, 6442.2631852581],
    [0.0000000007, 4.42572835968, 4705.4884900601],
    [0.00000000078, 3.37769653143, 23550.5878691661],
    [0.0000000007, 3.84581453123, 12036.21691740469],
    [0.00000000077, 5.00579533671, 5237.67719632029],
    [0.00000000069, 1.30888647192, 16207.64245401849],
    [0.00000000082, 3.91623659935, 6774.98295993371],
    [0.00000000067, 4.88284115481, 7083.14079264031],
    [0.00000000067, 0.26461151247, 6394.50630976251],
    [0.00000000067, 3.24232940659, 6172.1330251873],
    [0.00000000077, 0.28397734649, 9924.5666040271],
    [0.0000000008, 3.79678848458, 22380.9996177575],
    [0.0000000007, 3.0309505933, 6390.9831914135],
    [0.0000000007, 0.47599032576, 6175.6561435363],
    [0.00000000074, 4.12433601146, 16193.41536001689],
    [0.00000000076, 4.07719654455, 32217.4439985643],
    [0.00000000091, 0.90446873976, 6653.0194834153],
    [0.00000000091, 2.6024721793, 5913.6198515345],
    [0.00000000067, 4.94532713838, 6265.50714535691],
    [0.00000000067, 4.84479908786, 6301.1321895929],
    [0.00000000067, 3.01186125982, 5959.3266158505],
    [0.00000000083, 4.51648793763, 16723.10632511149],
    [0.0000000008, 5.49180050451, 23646.5670963839],
    [0.00000000068, 2.07232606852, 4897.4243911387],
    [0.00000000069, 0.56996686256, 6944.5525942559],
    [0.00000000089, 3.57060375879, 10660.44311755889],
    [0.00000000079, 3.24586891365, 35371.6434484929],
    [0.00000000073, 0.54359299539, 6370.62787201471],
    [0.00000000073, 2.96334792367, 6196.0114629351],
    [0.00000000065, 5.236721906, 22345.0165586247],
    [0.00000000064, 5.80516008052, 15265.64270181689],
    [0.00000000066, 1.12499582368, 6315.2919732917],
    [0.00000000066, 2.38194509538, 6251.34736165811],
    [0.00000000065, 3.44248995108, 323.74923414091],
    [0.00000000076, 1.46082924902, 10873.74221299689],
    [0.00000000084, 0.49974269222, 109.9625037359],
    [0.00000000063, 2.70916029747, 11823.4054569337],
    [0.00000000064, 4.80332084911, 28774.2817889683],
    [0.00000000072, 2.11265208796, 18099.7594409665],
    [0.00000000066, 1.21054975257, 17576.7903418305],
    [0.00000000072, 0.02703719822, 245707.7099218278],
    [0.00000000061, 3.91641579991, 10557.8379783073],
    [0.00000000064, 5.46712129325, 71430.9394356126],
    [0.00000000068, 1.33734717206, 28760.05469496669],
    [0.00000000062, 2.25046201901, 3854.7898494737],
    [0.00000000073, 4.61252989167, 23440.3815479467],
    [0.0000000006, 1.65871121739, 13088.9729355601],
    [0.00000000078, 2.99014426818, 12564.91104475801],
    [0.0000000006, 2.90135289748, 7548.8871461013],
    [0.00000000059, 4.12263682656, 6286.3551508569],
    [0.00000000075, 2.85045311521, 18625.1265717558],
    [0.00000000058, 5.18922617388, 35050.2440919589],
    [0.0000000006, 4.91746089028, 553.8132203259],
    [0.00000000069, 4.25329717989, 167993.9384537073],
    [0.00000000059, 5.13629564655, 41991.0297503823],
    [0.00000000062, 4.44636395235, 15663.79170522509],
    [0.00000000081, 5.9829774482, 7250.29054491051],
    [0.00000000059, 1.11500712714, 6277.2537518451],
    [0.00000000059, 2.39193379192, 6289.3855831047],
    [0.00000000063, 0.5630053912, 18003.38853270651],
    [0.00000000057, 3.30567043605, 793.0187059509],
    [0.00000000057, 1.5979444444, 10027.65937824569],
    [0.0000000006, 0.63448798616, 647.25465079831],
    [0.00000000072, 5.73566114928, 4597.77991000629],
    [0.00000000059, 5.39392547964, 6279.30891415889],
    [0.00000000068, 1.14499717138, 3166.66025521511],
    [0.00000000056, 3.10776343336, 6226.5164053051],
    [0.00000000056, 0.3991774857, 6340.12292964471],
    [0.00000000056, 0.95649088929, 12303.3115940935],
    [0.00000000057, 1.51972566902, 5864.3952685743],
    [0.00000000057, 1.98721525004, 6702.2440663755],
    [0.00000000069, 0.33222800273, 23536.3607751645],
    [0.00000000059, 2.36664156781, 5760.25461441409],
    [0.00000000065, 1.96288183765, 12139.30969162329],
    [0.00000000059, 1.81423548051, 67589.3312645407],
    [0.00000000073, 2.0885444229, 11079.92776143409],
    [0.00000000076, 0.77803347659, 23227.0824525087],
    [0.00000000067, 0.54633497662, 4804.4530934105],
    [0.00000000073, 4.43869578954, 30349.1275902505],
    [0.00000000074, 3.17776060575, 92747.9329843061],
    [0.0000000007, 6.2781822466, 12299.7884757445],
    [0.0000000006, 5.08460970539, 12171.7696324071],
    [0.00000000059, 1.03458131364, 15.49628866851],
    [0.00000000074, 1.19968434762, 3684.1342325067],
    [0.00000000058, 1.58539308271, 6717.0314053517],
    [0.00000000053, 3.6867459949, 26087.65932409069],
    [0.00000000059, 5.76308404993, 12164.7233957091],
    [0.00000000063, 5.23211999381, 5219.5179490556],
    [0.00000000056, 2.45377850108, 3178.38960805111],
    [0.00000000063, 2.16148808063, 5227.38225558179],
    [0.0000000007, 4.83368738065, 19004.4041319249],
    [0.00000000072, 2.62595674809, 4583.55281600469],
    [0.00000000052, 0.96524582701, 3627.2636600341],
    [0.00000000052, 3.30278586555, 6411.2712005095],
    [0.00000000052, 0.20415505351, 6155.3681344403],
    [0.00000000054, 2.04667654344, 5849.6079295981],
    [0.00000000066, 5.93782050272, 5791.16874004909],
    [0.00000000066, 5.93782050272, 5791.6563750161],
    [0.00000000051, 2.41252260456, 5113.2437810993],
    [0.00000000058, 2.72227505748, 30775.7257811265],
    [0.00000000061, 0.72832616881, 14169.5497447469],
    [0.00000000054, 3.16101850189, 10454.74520408871],
    [0.00000000056, 1.20035157643, 23141.8022004081],
    [0.00000000067, 3.89077193587, 28313.0449871775],
    [0.00000000056, 0.37854134464, 5244.2930566845],
    [0.00000000062, 0.60927850338, 5657.6494751625],
    [0.00000000062, 2.89766241568, 6908.9898597873],
    [0.0000000005, 3.10994458213, 2574.99527684569],
    [0.0000000005, 2.8935214834, 536.5606946119],
    [0.0000000005, 0.38317924664, 6684.9917892321],
    [0.0000000005, 3.12376167242, 5881.6475457177],
    [0.00000000049, 0.36435757253, 16310.73522823709],
    [0.00000000049, 3.50595022612, 16311.2228632041],
    [0.00000000065, 2.20156720545, 46386.7499258277],
    [0.00000000069, 5.16096365273, 60530.2451682583],
    [0.00000000068, 4.61952317468, 96678.14268052569],
    [0.00000000049, 4.01249891427, 12323.17927852529],
    [0.0000000005, 2.38095415684, 21954.4014268815],
    [0.00000000049, 4.98226292129, 4164.5558070965],
    [0.00000000059, 0.5483071696, 33794.7875410121],
    [0.0000000005, 1.64594745036, 43739.0461634493],
    [0.00000000059, 2.71376255252, 3981.73385156551],
    [0.00000000058, 3.16580349936, 27707.29867681129],
    [0.00000000051, 1.43461397348, 7669.21494381111],
    [0.00000000048, 3.23576326319, 3646.59419483791],
    [0.00000000065, 1.63790414031, 82534.6474380951],
    [0.00000000056, 2.62361047024, 800.06494264891],
    [0.00000000057, 2.56200976684, 11609.61872652869],
    [0.00000000048, 3.66284145075, 26.5421372833],
    [0.00000000047, 5.82227097996, 30640.1004561165],
    [0.0000000006, 3.54507538375, 8982.5668518255],
    [0.00000000049, 2.15364675842, 96563.24283557819],
    [0.0000000005, 3.60628396854, 17583.9038888313],
    [0.00000000046, 4.33029118489, 23539.46356884929],
    [0.00000000048, 4.40476950322, 170.4290531357],
    [0.00000000055, 0.06525117672, 735.6326960483],
    [0.00000000054, 5.90233323358, 6680.98103591609],
    [0.0000000006, 3.29126676894, 44033.8837720559],
    [0.00000000064, 5.97731735914, 80181.29364935629],
    [0.00000000059, 3.6095913283, 24279.3508356971],
    [0.00000000049, 3.59486989773, 5490.5447790075],
    [0.00000000058, 5.95314247069, 6490.0204047715],
    [0.00000000058, 3.83698375555, 6076.6189301783],
    [0.00000000046, 1.35461053261, 18208.1061251085],
    [0.00000000045, 3.19696372316, 4480.46004178609],
    [0.00000000055, 1.99803947181, 16097.9237677661],
    [0.00000000055, 1.99803947181, 16097.43613279909],
    [0.00000000061, 3.53347961961, 491.9071099423],
    [0.00000000054, 1.22650408797, 6006.5738956105],
    [0.00000000054, 2.28043683109, 6560.0654393393],
    [0.00000000044, 4.77367705513, 5333.65642353809],
    [0.00000000052, 3.85218997059, 244287.8438247112],
    [0.00000000044, 2.69173127084, 2301.34199842589],
    [0.00000000045, 4.35951224787, 33794.2999060451],
    [0.00000000046, 3.84874383995, 4384.48081456829],
    [0.00000000048, 4.63629874583, 35579.9350570535],
    [0.00000000051, 4.91886576255, 18326.8939493639],
    [0.00000000045, 2.63923033609, 533.45790092711],
    [0.00000000046, 3.15339657493, 16703.3059509825],
    [0.00000000047, 2.39403388232, 5209.2230083171],
    [0.00000000051, 1.31112479278, 38650.4173236825],
    [0.00000000046, 2.47672465258, 12555.3498172024],
    [0.00000000052, 4.64446990453, 5992.3468016089],
    [0.00000000052, 5.14565632171, 6574.2925333409],
    [0.00000000044, 3.80837636245, 69942.1974183125],
    [0.00000000049, 3.62132943845, 12146.9108735911],
    [0.00000000053, 4.674525427, 39301.8531447125],
    [0.00000000045, 4.65107782321, 46360.9392409949],
    [0.00000000043, 1.54528326296, 8402.0835278533],
    [0.00000000043, 0.19791989913, 44137.1951668575],
    [0.00000000049, 3.54725333487, 22029.9691371861],
    [0.00000000044, 1.47478212539, 31441.92138724031],
    [0.00000000042, 2.85938112982, 9225.29545579949],
    [0.00000000045, 3.22032934298, 71519.54096076029],
    [0.00000000051, 2.95623880108, 7762.1862415393],
    [0.00000000041, 5.1439509665, 3735.48212924251],
    [0.00000000057, 1.24099052077, 40398.4337367495],
    [0.00000000047, 6.03171570454, 4707.9862312257],
    [0.00000000056, 5.36736063063, 28664.0754677489],
    [0.0000000005, 2.5872993074, 11919.3846841515],
    [0.00000000047, 5.61037642387, 316428.47249139857],
    [0.00000000041, 2.70468936208, 27278.7126339243],
    [0.00000000056, 1.28041103259, 83659.5206898825],
    [0.00000000048, 0.93182108526, 12662.3747446841],
    [0.00000000054, 2.40910872834, 16627.12709789369],
    [0.00000000052, 2.84085536047, 12571.9184417737],
    [0.00000000043, 3.12713892129, 7322.34627826531],
    [0.00000000041, 1.99075260862, 664.99986261351],
    [0.00000000042, 3.11818521171, 5641.9544251257],
    [0.00000000044, 6.1600475768, 6425.4982945111],
    [0.00000000044, 3.63007864944, 6141.1410404387],
    [0.00000000039, 5.09444795757, 22594.2987131955],
    [0.0000000004, 1.17403028794, 20894.53186172529],
    [0.00000000044, 3.71228299188, 5540.3296069423],
    [0.0000000005, 0.98055905828, 17782.48825530069],
    [0.00000000054, 3.12084664124, 6006.2846737335],
    [0.00000000054, 0.38609427782, 6560.3546612163],
    [0.00000000045, 0.83260974343, 142861.1474187747],
    [0.00000000047, 5.83397233956, 24499.7634781359],
    [0.00000000043, 6.07854396898, 7026.3097280075],
    [0.00000000047, 0.38354823927, 955.8435590921],
    [0.00000000047, 2.93749588479, 24485.5363841343],
    [0.0000000004, 1.03647885736, 9388.2497268987],
    [0.00000000043, 4.24359473122, 6359.5857387505],
    [0.00000000042, 5.53288597787, 8635.69818627969],
    [0.00000000051, 4.03405257508, 27831.79440179969],
    [0.00000000042, 0.37690679264, 6334.60000533731],
    [0.00000000042, 3.13003412642, 6232.03932961249],
    [0.00000000052, 1.96232281613, 11905.1625906853],
    [0.0000000004, 6.22187049858, 7076.0945559423],
    [0.0000000004, 5.00617355027, 5444.3503797245],
    [0.0000000004, 4.78395267597, 7122.2889552253],
    [0.00000000038, 0.67446092329, 44933.4931736739],
    [0.00000000037, 4.98656910933, 5715.6010297445],
    [0.00000000037, 4.80355711691, 6851.0383052053],
    [0.00000000042, 5.51152847292, 36147.6536947839],
    [0.00000000042, 1.28742672679, 6238.1784478383],
    [0.00000000042, 2.21951419227, 6328.4608871115],
    [0.0000000004, 5.21427505339, 3214.8925631597],
    [0.00000000043, 2.22601042104, 23141.3145654411],
    [0.00000000041, 5.52595261887, 19804.5834740993],
    [0.00000000038, 4.48062431201, 20.11150191529],
    [0.0000000005, 0.05709227621, 84334.66158130829],
    [0.0000000005, 4.41842921988, 60284.16619777939],
];

const Y1: &[Term] = &[
    [0.00154550744, 5.35844734917, 0.2438174835],
    [0.00051503383, 4.43183566713, 12566.3955174663],
    [0.00001290763, 4.3886202018, 18849.4713674577],
    [0.00000702576, 0.18268310766, 6283.3196674749],
    [0.00000430422, 4.0229612515, 6282.83203250789],
    [0.00000212689, 0.16300557365, 6279.7965491259],
    [0.00000212524, 3.34405166686, 6286.84278582391],
    [0.00000062308, 5.07432195748, 4705.9761250271],
    [0.00000059808, 2.24108323998, 6257.0213476751],
    [0.00000059474, 1.26580020213, 6309.61798727471],
    [0.00000048914, 3.64253038225, 775.7664288075],
    [0.00000042814, 5.15102931682, 1059.6257476727],
    [0.00000046457, 4.72328803502, 7860.6632099227],
    [0.00000036653, 0.62556081234, 5753.6287023803],
    [0.00000035649, 6.15990909241, 5885.1706640667],
    [0.00000035362, 2.90135814576, 6813.0106325695],
    [0.00000032151, 3.62597628866, 6681.46867088311],
    [0.00000028763, 4.34539356227, 25132.5472174491],
    [0.00000028447, 5.8621512753, 6127.8992680407],
    [0.00000027537, 3.92840810925, 6438.7400669091],
    [0.00000024819, 1.35151106278, 5487.0216606585],
    [0.00000020615, 2.14741827387, 7079.61767429131],
    [0.00000019621, 1.31571192713, 5507.7970561509],
    [0.00000018378, 6.17760240913, 11790.8729061423],
    [0.00000016494, 4.64463821908, 11507.0135872771],
    [0.00000016756, 2.24858801378, 7058.8422787989],
    [0.00000014558, 4.40450472214, 6290.4332144757],
    [0.00000014404, 5.39361420229, 6276.2061204741],
    [0.00000014052, 6.16986019111, 796.5418242999],
    [0.00000012261, 5.72868820428, 4693.75913722409],
    [0.00000012758, 5.06070649359, 7.3573644843],
    [0.00000010086, 1.72162917776, 3739.0052475915],
    [0.00000009469, 3.06840825171, 6070.0205720369],
    [0.00000010425, 0.81162914438, 6284.2999885431],
    [0.00000010425, 2.69531177468, 6282.3393464067],
    [0.0000000957, 0.32347467387, 4137.1542509997],
    [0.00000009044, 0.43893334417, 6496.6187629129],
    [0.00000008544, 4.76970151659, 1194.6908277081],
    [0.00000008214, 5.9664039204, 1589.3167127673],
    [0.00000006157, 1.78596836636, 8827.6340873583],
    [0.00000006271, 3.18396187423, 8429.4850839501],
    [0.00000005524, 3.79861381511, 4933.4522578161],
    [0.00000007314, 5.20341424492, 4535.3032544079],
    [0.00000005157, 3.57885530448, 11770.0975106499],
    [0.00000006749, 2.75433387783, 5088.8726572503],
    [0.00000004853, 5.33701721257, 6040.5910635009],
    [0.00000005304, 0.93005422139, 3154.4432674121],
    [0.00000004985, 3.05697984231, 12569.91863581531],
    [0.00000004709, 2.39306975468, 5331.6012612243],
    [0.00000004601, 4.45296491447, 6526.04827144891],
    [0.00000004201, 5.99364092036, 7633.1870771337],
    [0.00000005607, 0.98720876729, 5729.7502646325],
    [0.00000004257, 2.55370490945, 3930.4535137031],
    [0.00000004394, 4.75948183378, 12559.2819704655],
    [0.0000000387, 1.1160149034, 7235.0380737255],
    [0.00000005154, 4.58850581748, 8031.3360805419],
    [0.00000005036, 2.51929382179, 6836.8890703173],
    [0.00000005076, 0.73526458069, 7477.7666776995],
    [0.00000003593, 3.97650177033, 12565.9078824993],
    [0.00000003384, 3.83274545225, 10977.32262218251],
    [0.00000003371, 5.00200001284, 11371.9485072417],
    [0.00000003536, 5.30432752281, 4164.0681721295],
    [0.00000004292, 3.36706453434, 1592.8398311163],
    [0.00000003407, 0.8351964065, 3128.6325825793],
    [0.00000003152, 0.16276893009, 5223.93773728571],
    [0.00000002883, 0.2083834918, 1747.7725955835],
    [0.00000002751, 3.67369812017, 7342.7015976641],
    [0.00000003323, 3.48959648614, 801.5771136403],
    [0.00000002999, 0.68275608544, 8636.18582124671],
    [0.00000002496, 5.09157906387, 2145.92159899169],
    [0.00000003358, 5.82350976219, 155.17658195069],
    [0.00000002297, 2.96479731544, 17260.3984721739],
    [0.00000002047, 1.96580631113, 1990.9888345245],
    [0.00000002778, 6.17391326343, 5481.4987363511],
    [0.00000002025, 3.01082711135, 951.4745887671],
    [0.00000002663, 1.00159277919, 26.0545023163],
    [0.00000002009, 4.16311202386, 4690.7236538421],
    [0.00000002148, 0.32608511593, 537.0483295789],
    [0.00000001853, 4.41841662668, 553.32558535889],
    [0.00000002478, 1.61013003664, 1349.62359217529],
    [0.00000002023, 0.82015419806, 522.8212355773],
    [0.00000001735, 4.49024043092, 529.44714761109],
    [0.00000002417, 3.59693248271, 7085.1405985987],
    [0.00000001809, 2.35536809783, 397.9051859247],
    [0.00000001893, 2.65666986732, 9438.0067523705],
    [0.00000001708, 5.00361322564, 10989.0519750185],
    [0.00000001898, 3.91087003459, 5216.33655531789],
    [0.0000000182, 3.4480860716, 5230.5636493195],
    [0.00000001541, 5.81316348536, 426.8420083595],
    [0.00000001555, 2.09924495059, 13096.0864825609],
    [0.00000001779, 0.23737949225, 12562.8723991173],
    [0.00000001448, 1.75844475078, 5753.14106741329],
    [0.0000000145, 5.7120136826, 6262.96434807611],
    [0.0000000145, 4.07811254364, 6303.6749868737],
    [0.00000001822, 0.13446699374, 10973.7995038335],
    [0.00000001372, 5.60520656116, 7875.91568110771],
    [0.00000001375, 2.34041210234, 7084.6529636317],
    [0.000000014, 3.28144398068, 12721.8159169005],
    [0.00000001247, 0.29225580262, 2119.00767786191],
    [0.00000001231, 2.53164637932, 18319.7804023631],
    [0.00000001141, 1.92161882496, 1066.7392946735],
    [0.00000001138, 1.23855949465, 2942.7072407751],
    [0.00000001047, 1.31663136695, 5642.93474619389],
    [0.00000001058, 2.19001683016, 242.97242145751],
    [0.00000001025, 0.60899466577, 10447.14402212089],
    [0.00000000973, 4.95398300734, 640.1411037975],
    [0.00000001114, 4.36978275435, 15721.0826023619],
    [0.00000000963, 0.56100772029, 2389.1378379327],
    [0.00000000941, 4.21626686326, 20426.8149099055],
    [0.00000001068, 5.08632600308, 529.9347825781],
    [0.00000000929, 1.54055499699, 10575.6505004253],
    [0.00000000899, 5.79114005938, 16496.6052136859],
    [0.00000000889, 5.01192484889, 6277.7967431675],
    [0.00000000889, 4.77820137734, 6288.8425917823],
    [0.00000001018, 2.66299766067, 12540.0971976665],
    [0.0000000106, 5.76865363011, 5760.7422493811],
    [0.00000001017, 4.02093017183, 6805.89708556871],
    [0.00000000797, 3.7933664392, 14314.4119305333],
    [0.00000000795, 0.10742263482, 6286.6060248927],
    [0.00000000795, 3.39951828424, 6280.0333100571],
    [0.000000008, 3.18366130818, 12029.5910053709],
    [0.00000000719, 2.29666441302, 9623.9320941747],
    [0.00000000698, 4.94363251872, 6148.2545874395],
    [0.00000000686, 3.79368723538, 5856.7214765989],
    [0.00000000673, 3.9910517516, 12964.5445208745],
    [0.00000000902, 0.69698416448, 13368.2164485901],
    [0.00000000678, 4.84647193821, 6418.38474751031],
    [0.00000000671, 6.00179402654, 6709.91785835091],
    [0.00000000744, 2.68741072621, 12043.8180993725],
    [0.00000000706, 2.51950741945, 16730.70750707931],
    [0.00000000661, 2.42216375426, 14712.5609339415],
    [0.00000000633, 5.58153853935, 4292.5746504339],
    [0.00000000621, 1.74121096386, 13119.9649203087],
    [0.00000000638, 2.04188798982, 4690.23601887509],
    [0.00000000625, 0.31613419014, 13518.1139237169],
    [0.00000000637, 4.59654254753, 5746.5151553795],
    [0.00000000628, 3.42448659886, 4686.6455902233],
    [0.00000000653, 5.85737456207, 3929.96587873609],
    [0.00000000578, 0.62377454326, 5088.3850222833],
    [0.00000000563, 3.2496492026, 10447.6316570879],
    [0.0000000061, 5.19955844918, 6820.1241795703],
    [0.00000000666, 4.87089013467, 3634.37720703489],
    [0.0000000072, 5.18811029494, 13916.2629271251],
    [0.0000000062, 4.30310535016, 31415.6230674405],
    [0.00000000553, 2.71699575652, 6259.44122972711],
    [0.00000000553, 0.78994516254, 6307.1981052227],
    [0.00000000523, 5.4700777667, 14143.7390599141],
    [0.00000000524, 3.97726441461, 12139.7973265903],
    [0.00000000569, 4.8389713972, 12036.7045523717],
    [0.00000000514, 3.87608366777, 4700.87268422489],
    [0.00000000563, 3.78589343112, 11014.8626598513],
    [0.00000000495, 2.00987402269, 13362.6935242827],
    [0.00000000481, 0.93576028071, 6279.4383321169],
    [0.00000000481, 2.57118063835, 6287.2010028329],
    [0.00000000466, 2.94306081142, 10177.5014970171],
    [0.0000000044, 5.16955709579, 1577.5873599313],
    [0.00000000437, 1.61052953646, 11499.9000402763],
    [0.00000000452, 3.98330238308, 12573.5090644671],
    [0.00000000499, 5.79985868924, 12410.9751180321],
    [0.0000000044, 0.57972339309, 24073.1652872599],
    [0.00000000587, 0.00678196141, 6.86972951729],
    [0.00000000388, 3.61198235279, 7860.17557495569],
    [0.00000000398, 4.20068362004, 8274.0646845159],
    [0.00000000423, 5.87838349624, 4694.2467721911],
    [0.0000000053, 1.4359316664, 12592.6938372661],
    [0.00000000379, 0.45309221604, 6180.2268932563],
    [0.00000000379, 3.05384870302, 6386.4124416935],
    [0.00000000377, 4.33272540326, 7872.39256275871],
    [0.00000000419, 4.05140241721, 5327.7199258663],
    [0.00000000383, 4.67353188247, 6247.2918007975],
    [0.00000000383, 5.11659434377, 6319.34753415231],
    [0.00000000375, 0.91076946484, 2352.6223362883],
    [0.00000000457, 2.62120808067, 6077.1341190377],
    [0.00000000457, 0.88573283839, 6489.5052159121],
    [0.00000000481, 3.46562904756, 4292.0870154669],
    [0.00000000344, 4.9990694793, 18451.3223640495],
    [0.00000000453, 5.43816135018, 2787.2868413409],
    [0.00000000364, 2.82703012884, 6245.2919948391],
    [0.00000000364, 0.67991079022, 6321.3473401107],
    [0.00000000327, 1.14128906507, 12323.6669134923],
    [0.00000000358, 0.15971399837, 9917.45305702629],
    [0.00000000342, 5.26072614817, 6262.5442719825],
    [0.00000000342, 4.52940007806, 6304.0950629673],
    [0.00000000318, 4.8460346641, 11926.4982311523],
    [0.0000000032, 1.13215851865, 77714.015285604],
    [0.00000000354, 5.73706716445, 7238.9194090835],
    [0.00000000318, 3.75423383039, 6254.8704800071],
    [0.00000000318, 6.03589239585, 6311.7688549427],
    [0.00000000304, 0.43890915611, 12779.6946129043],
    [0.00000000343, 2.14223194635, 6298.57213865991],
    [0.00000000343, 1.36470897271, 6268.0671962899],
    [0.00000000359, 2.52875634099, 1052.51220067191],
    [0.00000000398, 4.83537015899, 1551.2890401315],
    [0.00000000306, 1.01793913946, 5863.8350235997],
    [0.000000003, 0.20529153395, 90280.1669855868],
    [0.00000000307, 4.86343200722, 3893.93801205869],
    [0.00000000297, 2.08300781298, 5429.63565075589],
    [0.00000000365, 1.17462915798, 10022.0810975829],
    [0.00000000336, 1.15285276926, 17782.9758902677],
    [0.00000000295, 2.48770580169, 6702.8043113501],
    [0.00000000288, 0.61716195626, 18073.9487561337],
    [0.00000000287, 4.90856628789, 1577.0997249643],
    [0.00000000378, 5.11185072605, 2353.1099712553],
    [0.00000000289, 1.47281714617, 213.5429129215],
    [0.00000000347, 2.29918133719, 5223.4501023187],
    [0.00000000321, 0.66708336426, 17797.2029842693],
    [0.00000000289, 3.73571084362, 220.6564599223],
    [0.0000000026, 2.61364471837, 955.3559241251],
    [0.00000000268, 5.19927474541, 14945.0723560709],
    [0.00000000242, 2.77307042091, 2544.5582373669],
    [0.00000000245, 3.88798752568, 7632.6994421667],
    [0.00000000234, 2.5031380528, 1596.43025976811],
    [0.00000000267, 4.25976324066, 206.42936592071],
    [0.00000000282, 2.93181023342, 13341.9181287903],
    [0.00000000279, 4.70853062526, 4731.7868098599],
    [0.0000000029, 0.46137131163, 5642.4420600927],
    [0.00000000298, 5.65061835836, 17790.08943726851],
    [0.0000000027, 0.59449456012, 12168.2465140581],
    [0.00000000294, 0.95816279728, 2146.4092339587],
    [0.00000000214, 2.50623255971, 8030.8484455749],
    [0.00000000207, 3.18045634687, 213.0552779545],
    [0.00000000216, 4.03237077499, 3185.43584474911],
    [0.00000000195, 4.44222765867, 5884.68302909969],
    [0.00000000199, 2.36156558922, 1748.2602305505],
    [0.0000000025, 3.04516390608, 6924.1972748571],
    [0.00000000194, 0.79669370564, 641.12142486571],
    [0.00000000203, 0.68276896116, 6503.7323099137],
    [0.00000000203, 2.8241719579, 6062.9070250361],
    [0.00000000258, 0.91786109532, 796.0541893329],
    [0.00000000189, 3.20457516516, 11506.52595231009],
    [0.00000000186, 4.84188314285, 18209.5740811437],
    [0.00000000184, 2.638755168, 12566.4628277691],
    [0.0000000018, 4.19729049815, 853.4401992355],
    [0.00000000185, 6.25586281827, 3495.78900865049],
    [0.00000000205, 0.22424585668, 5849.1202946311],
    [0.00000000187, 4.34056279496, 10213.5293636945],
    [0.00000000187, 0.48606035843, 6290.36590417291],
    [0.00000000187, 3.02088056063, 6276.2734307769],
    [0.00000000235, 4.34532332705, 9779.3524936089],
    [0.00000000173, 6.09941552473, 19651.2922985815],
    [0.00000000184, 3.08285813784, 12566.32820716351],
    [0.0000000023, 0.66694562429, 12567.37583853451],
    [0.00000000166, 6.03836479949, 110.45013870291],
    [0.00000000189, 1.27307578752, 3.76693583251],
    [0.00000000166, 5.90720968173, 433.9555553603],
    [0.00000000186, 6.04048637618, 5863.3473886327],
    [0.00000000184, 4.58711235161, 10983.94853421629],
    [0.00000000184, 1.80970242494, 6037.4880212455],
    [0.00000000156, 0.77353737613, 2648.6986429565],
    [0.00000000182, 5.0435114853, 10969.72144021469],
    [0.00000000175, 1.69691915551, 6529.1513137043],
    [0.00000000154, 4.10646056877, 6453.9925380941],
    [0.00000000154, 5.68366565747, 6112.6467968557],
    [0.00000000164, 2.95193833305, 12353.0964220283],
    [0.00000000146, 2.48650028218, 149.8070146181],
    [0.00000000184, 4.91752478989, 11015.3502948183],
    [0.00000000191, 0.72322692096, 3894.4256470257],
    [0.00000000144, 2.19099222002, 18636.1722720197],
    [0.00000000146, 0.42084749575, 13760.8425276909],
    [0.00000000142, 2.91645242674, 4156.95462512869],
    [0.00000000185, 5.29181252606, 7234.5504387585],
    [0.00000000133, 4.73063574833, 18139.5383188994],
    [0.00000000131, 0.04654287508, 5507.3094211839],
    [0.00000000146, 0.32618788162, 18875.2820522905],
    [0.00000000128, 4.98427830485, 6069.53293706989],
    [0.00000000128, 1.75166251045, 16200.52890701769],
    [0.00000000123, 0.73895960068, 20.5315780089],
    [0.00000000121, 5.69434162626, 17256.8753538249],
    [0.00000000123, 4.81514598285, 6393.5259886943],
    [0.00000000123, 4.97498024339, 6173.1133462555],
    [0.00000000117, 2.90632080371, 18852.9944858067],
    [0.0000000012, 5.75152020178, 9381.2034902007],
    [0.00000000113, 3.90786027747, 65147.37595065419],
    [0.00000000137, 2.11120201406, 16201.0165419847],
    [0.00000000113, 0.36200887356, 6836.40143535029],
    [0.00000000123, 2.85759760823, 12565.4151963981],
    [0.00000000132, 4.51334720616, 17655.0243572331],
    [0.00000000113, 5.69373873614, 10575.1628654583],
    [0.00000000113, 3.6677603282, 10213.0417287275],
    [0.00000000116, 0.66749075538, 17253.2849251731],
    [0.0000000012, 0.70954573147, 10420.23010099111],
    [0.00000000109, 5.21836603318, 633.0275567967],
    [0.00000000103, 4.83071292354, 6295.0490203109],
    [0.00000000103, 4.9594133027, 6271.5903146389],
    [0.00000000104, 4.01023132524, 23013.7833570707],
    [0.00000000105, 5.32684825848, 11790.3852711753],
    [0.00000000109, 4.22545370482, 3340.36860921629],
    [0.00000000102, 1.02602291037, 10970.2090751817],
    [0.00000000101, 5.99270341494, 4803.9654584435],
    [0.00000000114, 3.78830179341, 4171.1817191303],
    [0.00000000111, 2.09152457722, 1582.2031657665],
    [0.00000000107, 0.90140521385, 23543.4743221653],
    [0.00000000099, 4.24784832079, 10973.3118688665],
    [0.00000000102, 4.09962394648, 6549.9267091967],
    [0.00000000102, 5.69050227976, 6016.7126257531],
    [0.0000000012, 0.92616350319, 11514.1271342779],
    [0.00000000095, 1.12824235931, 17267.5120191747],
    [0.00000000121, 4.76575826483, 13625.7774476555],
    [0.000000001, 3.61435033946, 10976.83498721549],
    [0.0000000009, 2.11761227033, 76.50988875911],
    [0.000000001, 5.94744998603, 8661.9965060795],
    [0.00000000089, 3.76175372959, 1350.1112271423],
    [0.00000000087, 2.7631069945, 9917.9406919933],
    [0.00000000086, 4.36870119289, 12809.12412144031],
    [0.00000000095, 6.0559745773, 12345.9828750275],
    [0.00000000084, 3.1161050048, 775.2787938405],
    [0.00000000106, 3.5720100499, 11216.5281078075],
    [0.00000000095, 0.92966555257, 12012.8261146239],
    [0.00000000082, 4.72839816349, 5643.4223811609],
    [0.00000000081, 2.27692529332, 11614.6771112157],
    [0.00000000084, 5.85994160066, 6255.9181113781],
    [0.00000000084, 3.93018462558, 6310.7212235717],
    [0.0000000008, 5.05950625443, 6923.2169537889],
    [0.00000000085, 1.08248438849, 5635.8211991931],
    [0.00000000084, 4.61502942146, 10440.03047512009],
    [0.0000000008, 2.62622746074, 3583.5848481573],
    [0.00000000092, 5.59171891913, 10818.3791043993],
    [0.00000000077, 4.13228553675, 6993.2527160332],
    [0.0000000008, 6.08197788088, 13521.9952590749],
    [0.00000000104, 0.70806546737, 5650.0482931947],
    [0.00000000093, 5.00569753414, 4732.2744448269],
    [0.00000000085, 1.74569264442, 22805.4917485101],
    [0.00000000086, 5.52511956951, 12360.2099690291],
    [0.00000000075, 5.57236272383, 5120.35732810009],
    [0.0000000009, 5.33797857569, 6370.62787201471],
    [0.0000000009, 4.45214765055, 6196.0114629351],
    [0.00000000082, 4.91006846138, 18842.3578204569],
    [0.00000000101, 1.37756832018, 3097.64000524229],
    [0.00000000094, 0.74657649932, 10177.01386205009],
    [0.00000000083, 3.74913323692, 18415.7596295809],
    [0.00000000073, 4.52746639645, 949.4194264533],
    [0.00000000101, 4.43327916798, 3104.6862419403],
    [0.00000000074, 1.25396392931, 13517.62628874989],
    [0.00000000092, 0.77959714125, 16858.7263504167],
    [0.00000000075, 1.57278335709, 1059.1381127057],
    [0.00000000085, 4.52163234616, 398.3928208917],
    [0.00000000069, 5.60384680292, 11713.1991357143],
    [0.00000000084, 5.92557534615, 2378.9206560881],
    [0.00000000069, 2.18342250812, 11712.71150074729],
    [0.00000000075, 0.05753316454, 30356.2411372513],
    [0.00000000067, 3.04134731899, 3154.9309023791],
    [0.00000000076, 3.2640136421, 18429.9867235825],
    [0.00000000068, 2.6918550825, 11925.5179100841],
    [0.00000000067, 4.81689271569, 10454.25756912169],
    [0.00000000073, 1.35808826471, 15670.83794192309],
    [0.00000000065, 1.77865763794, 6438.2524319421],
    [0.00000000069, 1.72420196911, 17298.4261448097],
    [0.00000000087, 3.52675260029, 3904.1551939033],
    [0.00000000076, 5.44623063701, 5231.0512842865],
    [0.00000000064, 2.12314868459, 3496.2766436175],
    [0.00000000078, 2.74559935849, 8672.21368792411],
    [0.00000000066, 4.98895923052, 14143.2514249471],
    [0.00000000063, 5.70776457338, 24357.0246061251],
    [0.00000000063, 0.57965828598, 15720.5949673949],
    [0.00000000061, 2.1561940592, 16460.5773470085],
    [0.00000000073, 6.07488391156, 9387.76209193169],
    [0.00000000057, 4.37179192959, 17259.91083720689],
    [0.00000000059, 2.26511827996, 9778.8648586419],
    [0.00000000058, 1.67874293827, 155.6642169177],
    [0.0000000006, 1.94469304669, 34570.3101523361],
    [0.00000000057, 2.88994977642, 149854.6439522914],
    [0.00000000056, 3.76314176838, 12456.1891962469],
    [0.00000000056, 5.62479142768, 17996.2749857057],
    [0.00000000056, 0.60886736064, 11764.5745863425],
    [0.00000000054, 4.53224684011, 4705.4884900601],
    [0.00000000055, 6.11029124003, 13915.77529215809],
    [0.00000000061, 4.86430679802, 28237.4772768729],
    [0.00000000065, 4.2996552855, 7335.5880506633],
    [0.00000000072, 5.48795829629, 6055.8435346859],
    [0.00000000072, 4.30216792995, 6510.7958002639],
    [0.00000000071, 4.94322519248, 12545.6201219739],
    [0.00000000061, 5.98387073766, 6312.74917601091],
    [0.00000000061, 3.80625548858, 6253.8901589389],
    [0.00000000052, 1.83719780245, 5326.5428765373],
    [0.00000000054, 2.78309524301, 2699.49100183409],
    [0.00000000052, 0.8773893383, 8983.0544867925],
    [0.00000000066, 0.78258344897, 14919.2616712381],
    [0.0000000005, 1.22263365304, 5572.8989839496],
    [0.00000000051, 2.33500088089, 16522.4158985187],
    [0.00000000049, 2.61658441943, 35579.9350570535],
    [0.00000000053, 6.07542895582, 6208.5380689076],
    [0.00000000053, 3.71469727042, 6358.1012660422],
    [0.00000000049, 3.35593265214, 21393.7857873411],
    [0.00000000049, 4.47248238697, 5547.4431539431],
    [0.00000000049, 5.31764383927, 7019.19618100671],
    [0.00000000049, 1.02044068888, 12416.8323203317],
    [0.0000000005, 0.93918602686, 12592.2062022991],
    [0.0000000005, 4.78759248733, 26084.2656236997],
    [0.00000000051, 1.83601012538, 23006.6698100699],
    [0.00000000058, 4.03623415117, 15141.14697682849],
    [0.00000000047, 5.68903994773, 24279.3508356971],
    [0.00000000049, 3.40926939847, 6816.53375091851],
    [0.00000000049, 0.09767152059, 5750.1055840313],
    [0.00000000046, 1.88054905125, 19379.1623325523],
    [0.00000000052, 5.74808775798, 16737.33341911309],
    [0.00000000047, 0.52219046486, 24066.0517402591],
    [0.00000000046, 4.16717022039, 104351.8563837803],
    [0.00000000063, 6.25484174196, 8662.48414104651],
    [0.00000000048, 3.28503810088, 26735.7014447297],
    [0.00000000046, 3.91775350902, 12132.6837795895],
    [0.0000000005, 2.92364175862, 24602.8562523545],
    [0.00000000054, 4.75214039499, 7834.3648901229],
    [0.00000000045, 3.48807574467, 161000.92955515758],
    [0.00000000049, 2.94405201174, 29303.9727540629],
    [0.00000000049, 1.43156848803, 10984.4361691833],
    [0.00000000045, 0.70883599249, 45584.9289947039],
    [0.00000000046, 1.86995211145, 5244.2930566845],
    [0.00000000048, 3.53510882628, 23581.0143598341],
    [0.00000000049, 2.17177379198, 19650.8046636145],
    [0.00000000049, 3.41897587826, 29289.7456600613],
    [0.00000000044, 1.44008987426, 6390.9831914135],
    [0.00000000044, 2.0668510448, 6175.6561435363],
    [0.00000000051, 2.65580143245, 17789.60180230149],
    [0.00000000042, 6.18543275273, 24705.9490265731],
    [0.00000000042, 5.90805829894, 15663.79170522509],
    [0.00000000043, 3.08250524084, 16460.08971204149],
    [0.00000000043, 0.28590581328, 553.8132203259],
    [0.00000000041, 3.21615501236, 17370.6047933933],
    [0.00000000053, 2.591510747, 13119.47728534169],
    [0.00000000042, 5.11995884892, 4164.5558070965],
    [0.00000000041, 2.05521298551, 23020.8969040715],
    [0.00000000045, 3.70227971577, 54247.1693182669],
    [0.0000000004, 4.57473494926, 32243.2546833971],
    [0.0000000004, 5.17184328434, 24336.2492106327],
    [0.0000000004, 1.71852303243, 11769.6098756829],
    [0.00000000045, 6.25985265406, 16723.10632511149],
    [0.00000000045, 6.25985265406, 16723.5939600785],
    [0.00000000042, 5.89327075469, 8827.14645239129],
    [0.0000000004, 4.71493835645, 8402.0835278533],
    [0.00000000039, 3.49714273023, 16062.4283436003],
    [0.00000000044, 4.44510876745, 5856.23384163189],
    [0.00000000038, 1.14212165839, 6297.5467614765],
    [0.00000000038, 2.36481926067, 6269.0925734733],
    [0.00000000041, 3.38233495451, 15508.8589407579],
    [0.00000000038, 4.96796930709, 6394.50630976251],
    [0.00000000038, 4.82215691915, 6172.1330251873],
    [0.00000000039, 1.74815791619, 29826.5501721567],
    [0.00000000046, 0.31322632556, 17297.9385098427],
    [0.00000000041, 4.0431578259, 6309.1303523077],
    [0.00000000038, 5.8240989512, 29089.0552334685],
    [0.00000000038, 4.59409111885, 11933.6117781531],
    [0.00000000037, 3.34091252113, 26482.4146271079],
    [0.00000000037, 3.64722285417, 20452.6255947383],
    [0.00000000037, 0.30900035436, 18073.46112116669],
    [0.00000000036, 2.98410187235, 11499.41240530929],
    [0.00000000045, 4.7564919846, 3340.8562441833],
    [0.00000000049, 4.21088151991, 18216.6876281445],
    [0.00000000038, 4.59187061808, 18202.4605341429],
    [0.00000000041, 3.91005845267, 5216.8241902849],
    [0.00000000036, 6.21139146959, 4060.97539791089],
    [0.00000000048, 5.14345155225, 951.9622237341],
    [0.00000000041, 3.90932016585, 18848.98373249069],
    [0.00000000038, 4.60880580452, 26709.8907598969],
    [0.00000000036, 3.12521745961, 28230.4310401749],
    [0.00000000036, 1.96840086543, 24491.18197509989],
    [0.00000000036, 1.56811412304, 9924.5666040271],
    [0.00000000048, 1.89701220521, 8982.5668518255],
    [0.00000000037, 3.60669363968, 22484.0923919761],
    [0.00000000047, 3.21269518092, 6040.10342853389],
    [0.00000000034, 3.68972702028, 6418.9449924849],
    [0.00000000034, 6.10039920596, 6147.69434246491],
    [0.00000000034, 3.67007112439, 9380.71585523369],
    [0.00000000036, 0.30403746373, 7238.4317741165],
    [0.00000000034, 0.40887602826, 17272.1278250099],
    [0.00000000037, 1.23154839984, 58953.3892607775],
    [0.00000000034, 0.33427002863, 29026.7290469913],
    [0.00000000033, 3.87501941695, 12721.32828193349],
    [0.00000000035, 1.63582276543, 7322.34627826531],
    [0.00000000044, 1.21937301495, 3981.73385156551],
    [0.00000000033, 3.59821221655, 19804.5834740993],
    [0.00000000033, 2.56047890182, 173567.0812551404],
    [0.00000000033, 6.16657680956, 205.9417309537],
    [0.00000000033, 5.44889821497, 23013.29572210369],
    [0.00000000034, 2.13261854972, 49515.1386909235],
    [0.00000000034, 3.38050467777, 38500.5198485557],
    [0.00000000032, 2.81221233882, 17686.9966630499],
    [0.00000000036, 1.67423219491, 5641.9544251257],
    [0.00000000032, 2.91090812586, 21228.63584102931],
    [0.00000000033, 0.13839577785, 34520.5531268643],
    [0.00000000033, 5.65380556855, 8635.69818627969],
    [0.00000000031, 1.88042187886, 5746.0275204125],
    [0.00000000041, 2.52021697492, 21202.3375212295],
    [0.00000000037, 5.92836585991, 7349.81514466491],
    [0.00000000034, 2.18099177342, 16496.11757871889],
    [0.00000000032, 0.90143427409, 33019.2649296881],
    [0.00000000032, 1.54173979189, 21150.56954840009],
    [0.00000000037, 1.84830381005, 29296.8592070621],
    [0.00000000036, 5.02250294215, 27511.2240560537],
    [0.00000000035, 3.77934660139, 11933.12414318609],
    [0.00000000035, 4.26341483447, 11918.89704918449],
    [0.00000000035, 5.54313072444, 29062.7569136687],
    [0.0000000003, 1.38932865248, 12490.1294461907],
    [0.00000000032, 5.09927453137, 6334.60000533731],
    [0.00000000032, 4.69085169487, 6232.03932961249],
    [0.00000000029, 4.0599371678, 419.2408263917],
    [0.00000000029, 0.91834451421, 419.72846135871],
    [0.00000000029, 1.66178131503, 16858.23871544969],
    [0.0000000003, 2.73190240418, 16208.13008898551],
    [0.00000000029, 0.69175314473, 27278.7126339243],
    [0.00000000032, 4.73525892997, 5017.2645538815],
    [0.00000000028, 0.30767945102, 24080.2788342607],
    [0.0000000003, 1.00265951424, 23539.9512038163],
    [0.00000000029, 1.45883005475, 18606.25512851669],
    [0.0000000003, 4.73151177298, 30665.9111409493],
    [0.00000000034, 4.29199382621, 6660.6932753907],
    [0.00000000034, 5.49813240003, 5905.94605955911],
    [0.00000000038, 3.55143054136, 31571.0434668747],
    [0.00000000038, 4.53015131722, 16061.94070863329],
    [0.00000000029, 1.64885508302, 23539.46356884929],
    [0.00000000033, 2.88700963334, 3738.51761262449],
    [0.00000000028, 6.02264922068, 2942.21960580809],
    [0.00000000032, 2.75250951602, 15110.7099373497],
    [0.0000000003, 6.10434010761, 55023.1795645579],
    [0.00000000027, 5.24524976767, 233141.55822184499],
    [0.0000000003, 0.75326086687, 12587.1709129587],
    [0.00000000028, 3.97691648841, 34911.6558935745],
    [0.00000000027, 4.60109278395, 1692.40948698591],
    [0.00000000027, 6.13743188286, 2544.07060239989],
    [0.00000000027, 4.99580076168, 24382.8352909579],
    [0.00000000027, 4.42136306455, 6205.6458970469],
    [0.00000000027, 5.36876316169, 6360.99343790291],
    [0.00000000027, 4.95719787895, 31172.8944634665],
    [0.00000000026, 2.19655051246, 36949.4746259077],
    [0.00000000034, 4.45594644643, 18053.1733606413],
    [0.00000000027, 0.74968073356, 32367.3414736911],
    [0.00000000027, 3.34260766105, 4487.57358878689],
    [0.00000000028, 5.37411547339, 10239.3400485273],
    [0.00000000026, 1.30232025786, 4796.85191144269],
    [0.00000000026, 4.70861603764, 6226.4212925393],
    [0.00000000026, 5.0815101886, 6340.2180424105],
    [0.00000000029, 4.90026899469, 5974.0413448191],
    [0.00000000029, 4.88985723155, 6592.5979901307],
    [0.00000000026, 4.96950484222, 19402.55313533309],
    [0.00000000028, 3.99925126629, 46386.7499258277],
    [0.00000000032, 5.04462761864, 9225.7830907665],
    [0.00000000026, 4.1174501489, 9910.33951002549],
    [0.00000000025, 1.02839985963, 15265.64270181689],
    [0.00000000029, 4.33416022359, 52176.0501006319],
    [0.00000000027, 2.65258449905, 62883.5989569971],
    [0.00000000024, 5.26265995716, 11617.21990849651],
    [0.00000000024, 1.04936648816, 5120.8449630671],
    [0.00000000028, 4.8214392781, 6680.98103591609],
    [0.00000000024, 5.97769334002, 522.3336006103],
    [0.00000000025, 2.29282659231, 6263.64990657511],
    [0.00000000025, 1.21411432675, 6302.9894283747],
    [0.00000000029, 0.87325499796, 23581.5019948011],
    [0.00000000024, 5.21948189448, 29424.8780503995],
    [0.00000000028, 1.09161353868, 16737.8210540801],
    [0.00000000024, 3.55960074091, 22743.16556203289],
    [0.00000000024, 3.55960074091, 22743.6531969999],
    [0.00000000024, 4.28222488832, 25158.8455372489],
    [0.00000000025, 5.52194731109, 21424.2228268199],
    [0.00000000025, 5.52194731109, 21424.7104617869],
    [0.00000000024, 3.49943174674, 14712.07329897449],
    [0.00000000028, 6.07681616993, 5760.25461441409],
    [0.00000000024, 2.16376008059, 31969.1924702829],
    [0.00000000023, 5.33584675127, 17893.1822114871],
    [0.0000000003, 2.28483676839, 8584.9054833843],
    [0.00000000024, 1.64666673478, 23550.5878691661],
    [0.00000000023, 6.07302432574, 6717.0314053517],
    [0.00000000022, 2.42662159283, 7445.7943718827],
    [0.00000000023, 3.56571153376, 5849.6079295981],
    [0.00000000025, 5.52794317615, 14155.4684127501],
    [0.00000000023, 2.01489779401, 6294.36536773881],
    [0.00000000023, 1.49204312505, 6272.273967211],
    [0.00000000024, 5.81677586075, 18208.1061251085],
    [0.00000000024, 5.81677586075, 18208.5937600755],
    [0.00000000021, 4.21172313283, 22779.6810636773],
    [0.00000000029, 1.74369099855, 28628.5800435831],
    [0.00000000021, 3.56347944199, 40879.6843221273],
    [0.00000000021, 2.51496251708, 30221.1760572159],
    [0.00000000022, 6.09500922463, 4379.8828549737],
    [0.00000000022, 3.69512347867, 8186.7564799761],
    [0.00000000022, 2.95145769488, 28760.05469496669],
    [0.00000000026, 1.83973482412, 18422.8731765817],
    [0.0000000002, 2.37799900039, 12036.21691740469],
    [0.0000000002, 0.07485283254, 28313.0449871775],
    [0.00000000027, 5.38239668902, 34513.5068901663],
    [0.0000000002, 0.505513003, 34115.3578867581],
    [0.0000000002, 3.29228335956, 21548.7185518083],
    [0.0000000002, 5.25656062979, 17654.5367222661],
    [0.00000000025, 1.96130235408, 55798.7021758819],
    [0.0000000002, 5.53200449549, 20597.4877805247],
    [0.0000000002, 1.03604717996, 18875.76968725751],
    [0.00000000022, 2.01853988925, 1588.82907780029],
    [0.00000000024, 5.92091322542, 9411.7084325707],
    [0.00000000019, 1.1470624291, 536.5606946119],
    [0.0000000002, 3.42481272827, 6187.3404402571],
    [0.0000000002, 0.08212819079, 6379.2988946927],
    [0.00000000022, 2.87392170851, 18326.8939493639],
    [0.00000000022, 0.61268580951, 6233.5626420031],
    [0.00000000022, 2.89425510955, 6333.0766929467],
    [0.00000000018, 0.45956662142, 5972.4788686065],
    [0.00000000018, 3.04737429764, 6594.1604663433],
    [0.00000000019, 2.71317971903, 6948.0757126049],
    [0.00000000019, 0.79376120003, 5618.5636223449],
    [0.00000000019, 4.89700264579, 83974.0791732134],
    [0.00000000019, 2.72494811319, 84020.1030979774],
    [0.0000000002, 5.4203665991, 50316.9596220473],
    [0.0000000002, 1.28312164242, 9070.3626913323],
];

const Y2: &[Term] = &[
    [0.00052911498, 1.75323722235, 6283.3196674749],
    [0.00006074441, 0.48406211192, 0.2438174835],
    [0.00002406871, 2.6600639447, 12566.3955174663],
    [0.00000096033, 2.57406136836, 18849.4713674577],
    [0.00000029888, 2.30515825272, 6282.83203250789],
    [0.00000014021, 1.64042051619, 6279.7965491259],
    [0.00000013375, 1.74320372785, 6286.84278582391],
    [0.00000008148, 0.62869530307, 6309.61798727471],
    [0.00000008195, 2.81874475342, 6257.0213476751],
    [0.00000008001, 4.34877296703, 6127.8992680407],
    [0.00000007754, 5.43470598991, 6438.7400669091],
    [0.00000007223, 3.81034638754, 83997.09113559539],
    [0.00000004616, 4.59623594691, 710.1768660418],
    [0.0000000306, 3.26884940633, 4705.9761250271],
    [0.00000003717, 0.87961276723, 5507.7970561509],
    [0.00000002991, 2.48913608928, 25132.5472174491],
    [0.00000003235, 2.53504921673, 7058.8422787989],
    [0.00000002393, 1.83696733237, 775.7664288075],
    [0.00000002034, 2.77061597204, 6290.4332144757],
    [0.00000002028, 0.70943948464, 6276.2061204741],
    [0.00000002064, 0.01448293997, 7860.6632099227],
    [0.00000001914, 2.85234479868, 5487.0216606585],
    [0.0000000177, 3.48783151064, 1059.6257476727],
    [0.00000001761, 1.8082322026, 5753.6287023803],
    [0.00000001558, 0.56580595512, 7079.61767429131],
    [0.00000001551, 0.55852743151, 6040.5910635009],
    [0.00000001436, 1.28164050883, 5885.1706640667],
    [0.00000001469, 2.94324921966, 6526.04827144891],
    [0.00000001319, 1.89155311923, 6681.46867088311],
    [0.0000000118, 1.42090963151, 6813.0106325695],
    [0.00000001337, 5.75221416852, 5729.7502646325],
    [0.00000001039, 4.25243426113, 6282.3393464067],
    [0.00000001313, 0.5989755124, 529.9347825781],
    [0.00000001041, 5.4780137768, 6284.2999885431],
    [0.00000001202, 4.02829547071, 6836.8890703173],
    [0.00000000904, 0.85768945907, 5331.6012612243],
    [0.0000000087, 2.26660468565, 4933.4522578161],
    [0.00000001149, 3.02450680654, 167284.005405149],
    [0.00000001069, 1.09203232944, 1577.0997249643],
    [0.00000000772, 2.66290097432, 7235.0380737255],
    [0.00000000846, 1.36798976406, 11790.8729061423],
    [0.00000000742, 5.02007434299, 4137.1542509997],
    [0.00000000966, 2.05227643484, 11856.462468908],
    [0.00000000664, 1.21776131888, 7633.1870771337],
    [0.00000000662, 3.18968574411, 1194.6908277081],
    [0.00000000659, 5.95013449282, 11507.0135872771],
    [0.00000000853, 3.65338850674, 4535.3032544079],
    [0.00000000823, 1.06126729936, 155.17658195069],
    [0.00000000783, 4.30296275012, 5088.8726572503],
    [0.00000000785, 3.46658763633, 2353.1099712553],
    [0.00000000694, 3.50785804761, 801.5771136403],
    [0.00000000566, 4.42922662864, 796.5418242999],
    [0.00000000684, 1.11267726523, 3128.6325825793],
    [0.00000000499, 1.42594865875, 12569.91863581531],
    [0.00000000596, 6.09778115923, 8031.3360805419],
    [0.00000000486, 4.54237345712, 1589.3167127673],
    [0.00000000483, 4.68204073064, 8429.4850839501],
    [0.00000000441, 4.99112466662, 6496.6187629129],
    [0.00000000412, 0.87602065813, 4693.75913722409],
    [0.00000000561, 5.46330573132, 7477.7666776995],
    [0.0000000039, 4.63888431687, 6070.0205720369],
    [0.00000000405, 6.26538093406, 3739.0052475915],
    [0.00000000501, 1.82149883986, 1592.8398311163],
    [0.00000000392, 0.68216396598, 26.0545023163],
    [0.00000000369, 5.93410776393, 553.32558535889],
    [0.00000000483, 6.07777893059, 12036.7045523717],
    [0.00000000489, 3.70668603785, 5223.4501023187],
    [0.00000000481, 3.17195852109, 10213.5293636945],
    [0.00000000448, 5.56847234629, 156137.71980228278],
    [0.00000000321, 4.53991511859, 951.4745887671],
    [0.0000000032, 0.43138538654, 1990.9888345245],
    [0.00000000361, 2.165991341, 12565.9078824993],
    [0.00000000361, 4.79823251497, 12721.8159169005],
    [0.00000000412, 4.34259218946, 398.3928208917],
    [0.00000000304, 5.68078111352, 4690.7236538421],
    [0.00000000356, 6.00094576166, 5481.4987363511],
    [0.00000000283, 0.66912545661, 242.97242145751],
    [0.00000000362, 2.3155421074, 9438.0067523705],
    [0.00000000248, 3.18243221495, 8827.6340873583],
    [0.00000000252, 2.73244620528, 3154.4432674121],
    [0.00000000257, 0.22372520009, 11371.9485072417],
    [0.00000000327, 1.45001600721, 14143.7390599141],
    [0.0000000023, 1.80447328493, 1747.7725955835],
    [0.00000000289, 3.67617510107, 7085.1405985987],
    [0.00000000297, 3.17045499445, 1349.62359217529],
    [0.00000000209, 4.98580572759, 11770.0975106499],
    [0.00000000207, 0.21623312501, 4164.0681721295],
    [0.00000000188, 4.07593821324, 7875.91568110771],
    [0.00000000189, 5.31784128034, 2389.1378379327],
    [0.00000000194, 5.12285857348, 10977.32262218251],
    [0.00000000176, 2.51491286893, 7342.7015976641],
    [0.00000000164, 1.22070775546, 5223.93773728571],
    [0.00000000205, 1.64290799201, 10973.7995038335],
    [0.00000000205, 0.68022152849, 13368.2164485901],
    [0.00000000139, 3.04789845179, 10575.6505004253],
    [0.00000000155, 4.2433318882, 12410.9751180321],
    [0.00000000152, 4.81739365185, 3930.4535137031],
    [0.00000000129, 0.80954637051, 397.9051859247],
    [0.00000000127, 5.67893828134, 12592.6938372661],
    [0.00000000132, 4.8729166436, 8636.18582124671],
    [0.00000000122, 3.21278850975, 13119.9649203087],
    [0.00000000163, 2.50359725386, 5507.3094211839],
    [0.00000000114, 4.13352060999, 17260.3984721739],
    [0.00000000118, 0.80775184774, 4292.5746504339],
    [0.00000000148, 4.06616105867, 17790.08943726851],
    [0.00000000123, 2.18706277371, 12562.8723991173],
    [0.00000000103, 1.79915109205, 13518.1139237169],
    [0.00000000138, 2.26785827403, 12168.2465140581],
    [0.00000000107, 2.76898193474, 10989.0519750185],
    [0.00000000104, 0.56758990747, 2145.92159899169],
    [0.00000000096, 0.40713285174, 6283.25235717211],
    [0.00000000099, 0.70751931715, 13096.0864825609],
    [0.00000000096, 6.24621518908, 6283.3869777777],
    [0.00000000084, 3.6351698801, 16730.70750707931],
    [0.00000000111, 2.39242858566, 12540.0971976665],
    [0.00000000087, 4.45435464785, 10177.5014970171],
    [0.00000000078, 2.61342989032, 12323.6669134923],
    [0.00000000076, 4.1378241187, 6709.91785835091],
    [0.00000000105, 1.96765772501, 5642.4420600927],
    [0.00000000073, 5.60932378402, 5856.7214765989],
    [0.00000000102, 5.37997051996, 250570.9196747026],
    [0.0000000007, 0.51266920771, 5753.14106741329],
    [0.00000000071, 5.27404987073, 14314.4119305333],
    [0.00000000092, 0.39406209616, 13916.2629271251],
    [0.0000000007, 4.105296856, 7084.6529636317],
    [0.00000000091, 1.53880932897, 6924.1972748571],
    [0.00000000083, 2.41910116753, 31415.6230674405],
    [0.00000000088, 0.30300511757, 71430.45180064559],
    [0.00000000074, 3.53618023271, 529.44714761109],
    [0.00000000085, 4.40773297118, 95143.3767384616],
    [0.00000000061, 2.66034748981, 8274.0646845159],
    [0.0000000006, 3.95075537336, 16496.6052136859],
    [0.00000000058, 3.04970743906, 5642.93474619389],
    [0.00000000078, 0.84061745785, 213.5429129215],
    [0.00000000059, 3.10446906052, 640.1411037975],
    [0.00000000057, 3.63209087311, 4690.23601887509],
    [0.00000000056, 2.23091315346, 13341.9181287903],
    [0.00000000065, 4.959524106, 4731.7868098599],
    [0.00000000051, 0.09929724563, 3893.93801205869],
    [0.0000000005, 2.602900434, 12573.5090644671],
    [0.0000000005, 5.98749446465, 3634.37720703489],
    [0.00000000049, 0.70632876133, 18319.7804023631],
    [0.00000000066, 3.92505951821, 2787.2868413409],
    [0.00000000049, 0.42825389697, 13362.6935242827],
    [0.00000000048, 2.19153498916, 12964.5445208745],
    [0.00000000053, 2.55294637714, 14919.2616712381],
    [0.00000000058, 5.94322042199, 1577.5873599313],
    [0.00000000052, 5.99067773035, 15721.0826023619],
    [0.00000000061, 4.99956015956, 4292.0870154669],
    [0.00000000044, 5.02285128905, 24073.1652872599],
    [0.00000000044, 1.96034093811, 10447.14402212089],
    [0.00000000042, 2.52906622396, 20426.8149099055],
    [0.00000000059, 2.58678833053, 84672.2320270212],
    [0.00000000051, 3.81200106179, 6370.62787201471],
    [0.00000000051, 5.97812516445, 6196.0114629351],
    [0.00000000046, 5.23410298912, 2119.00767786191],
    [0.00000000041, 2.5224824135, 3185.43584474911],
    [0.00000000056, 4.84268946755, 10976.83498721549],
    [0.00000000051, 3.94604483748, 9437.5191174035],
    [0.00000000049, 1.6407993527, 239424.6340718364],
    [0.00000000036, 1.49154565635, 3495.78900865049],
    [0.00000000044, 2.12316916648, 18139.5383188994],
    [0.00000000035, 5.18466509768, 3929.96587873609],
    [0.00000000044, 3.23094444076, 8661.9965060795],
    [0.00000000046, 2.21535532938, 3894.4256470257],
    [0.00000000034, 2.24364878116, 6262.5442719825],
    [0.00000000034, 4.40970135798, 6304.0950629673],
    [0.00000000035, 5.15488505358, 18875.2820522905],
    [0.00000000035, 4.51996316476, 10420.23010099111],
    [0.00000000032, 5.33774590597, 23013.7833570707],
    [0.00000000034, 2.04067717162, 7.3573644843],
    [0.00000000045, 6.20022544523, 3340.8562441833],
    [0.00000000035, 1.9566970965, 10213.0417287275],
    [0.00000000031, 3.81393239996, 14712.5609339415],
    [0.0000000003, 2.82636067861, 12809.12412144031],
    [0.00000000039, 5.86021469295, 9779.3524936089],
    [0.00000000041, 0.90085517811, 82576.73740351178],
    [0.00000000031, 5.47911308336, 22779.6810636773],
    [0.00000000028, 2.5089595702, 2942.7072407751],
    [0.00000000028, 3.93140481871, 5429.63565075589],
    [0.00000000027, 5.61355223, 11014.8626598513],
    [0.00000000027, 0.53944014317, 9623.9320941747],
    [0.00000000025, 0.15499921281, 18209.5740811437],
    [0.00000000026, 0.9798455507, 9381.2034902007],
    [0.00000000025, 1.11733310909, 3583.5848481573],
    [0.0000000003, 4.41826131323, 10447.6316570879],
    [0.00000000032, 5.65959938774, 796.0541893329],
    [0.00000000023, 1.38575591729, 9917.45305702629],
    [0.00000000026, 5.61732376806, 12012.8261146239],
    [0.00000000024, 3.45407340381, 14143.2514249471],
    [0.00000000023, 0.69647593831, 26709.8907598969],
    [0.00000000021, 5.43974830479, 7632.6994421667],
    [0.00000000021, 0.80058820514, 17256.8753538249],
    [0.00000000028, 5.7868943383, 12353.0964220283],
    [0.00000000022, 3.26384247748, 77714.015285604],
    [0.00000000021, 4.41664687493, 6993.2527160332],
    [0.0000000002, 1.88345295944, 6836.40143535029],
    [0.0000000002, 3.87252932348, 1748.2602305505],
    [0.00000000026, 0.45595739946, 9225.7830907665],
    [0.00000000023, 5.52071600644, 149854.6439522914],
    [0.00000000026, 0.60119736394, 2544.07060239989],
    [0.00000000018, 0.71176167314, 11614.6771112157],
    [0.0000000002, 3.04333652471, 426.8420083595],
    [0.00000000019, 2.09021029647, 30640.1004561165],
    [0.00000000018, 3.20715016441, 155.6642169177],
    [0.00000000018, 0.32502884515, 11926.4982311523],
    [0.00000000022, 2.17863705978, 17298.4261448097],
    [0.00000000019, 4.82590950931, 18073.46112116669],
    [0.0000000002, 1.02950628439, 19651.2922985815],
    [0.00000000024, 3.14467908991, 5856.23384163189],
    [0.00000000023, 3.21288696705, 72850.8055327292],
    [0.00000000017, 2.38623798159, 8983.0544867925],
    [0.00000000016, 3.59989563011, 16460.5773470085],
    [0.00000000016, 2.7717927724, 17259.91083720689],
    [0.00000000021, 2.2028692608, 16858.7263504167],
    [0.0000000002, 5.1066646464, 23543.4743221653],
    [0.00000000021, 5.36525328799, 13367.7288136231],
    [0.0000000002, 2.47582665567, 2146.4092339587],
    [0.00000000014, 4.85508264889, 22484.0923919761],
    [0.00000000014, 6.23679853613, 16200.52890701769],
    [0.00000000015, 2.64768344463, 20199.3387771165],
    [0.00000000019, 1.24340851761, 8672.21368792411],
    [0.00000000019, 2.89835524904, 18073.9487561337],
    [0.00000000013, 3.14350306699, 16201.0165419847],
    [0.00000000017, 2.96004801328, 7860.17557495569],
    [0.00000000013, 3.12347768998, 18451.3223640495],
    [0.00000000016, 4.902764942, 5572.8989839496],
    [0.00000000012, 1.13909733386, 17996.2749857057],
    [0.00000000012, 5.43460350187, 19403.0407703001],
    [0.00000000012, 0.82655936469, 14945.0723560709],
    [0.00000000015, 0.47799392266, 12559.2819704655],
    [0.00000000012, 2.80799572996, 10818.3791043993],
    [0.00000000015, 5.28864619208, 12567.37583853451],
    [0.00000000011, 0.21391675163, 28767.1682419675],
    [0.00000000013, 5.80786469706, 90280.1669855868],
    [0.00000000011, 0.30991526634, 22805.4917485101],
    [0.00000000011, 0.6752635301, 35372.1310834599],
    [0.0000000001, 1.54770241799, 11506.52595231009],
    [0.00000000014, 0.36722951229, 21228.63584102931],
    [0.0000000001, 4.84303300061, 12779.6946129043],
    [0.0000000001, 4.48229440272, 23141.8022004081],
    [0.0000000001, 5.89241784221, 1350.1112271423],
    [0.0000000001, 4.07842068364, 10575.1628654583],
    [0.0000000001, 0.98564127078, 22345.5041935917],
    [0.0000000001, 0.62034181586, 9778.8648586419],
    [0.00000000009, 6.20390809264, 29826.5501721567],
    [0.0000000001, 2.66921279687, 23581.5019948011],
    [0.00000000011, 5.10849785178, 25158.8455372489],
];

const Y3: &[Term] = &[
    [0.0000023279, 1.83555296287, 0.2438174835],
    [0.00000076843, 0.95359770708, 12566.3955174663],
    [0.00000035331, 1.77537067174, 6283.3196674749],
    [0.00000005282, 0.8341018591, 18849.4713674577],
    [0.00000001631, 0.72620862558, 6282.83203250789],
    [0.00000001483, 0.65599216587, 6438.7400669091],
    [0.00000001479, 2.83072127404, 6127.8992680407],
    [0.00000000652, 3.13796451313, 6279.7965491259],
    [0.00000000656, 0.01615422945, 6286.84278582391],
    [0.00000000317, 1.4315769584, 6526.04827144891],
    [0.00000000318, 2.05944515679, 6040.5910635009],
    [0.00000000227, 0.70881980797, 25132.5472174491],
    [0.00000000201, 5.52615570373, 6836.8890703173],
    [0.00000000201, 4.2356326783, 5729.7502646325],
    [0.00000000036, 6.05003898151, 12569.91863581531],
    [0.00000000034, 0.36912822345, 4705.9761250271],
    [0.00000000033, 2.65665718326, 12410.9751180321],
    [0.00000000032, 3.81269087187, 6257.0213476751],
    [0.00000000032, 2.841331865, 6309.61798727471],
    [0.00000000026, 5.21573736647, 775.7664288075],
    [0.00000000023, 0.44696909593, 1059.6257476727],
    [0.00000000025, 0.0132635736, 7860.6632099227],
    [0.00000000027, 0.46730161827, 12565.9078824993],
    [0.0000000002, 2.19213288615, 5753.6287023803],
    [0.00000000019, 1.44435756454, 5885.1706640667],
    [0.00000000019, 4.47976718197, 6813.0106325695],
    [0.00000000018, 0.72211012099, 12721.8159169005],
    [0.00000000017, 5.20474716177, 6681.46867088311],
    [0.00000000013, 2.92478174105, 5487.0216606585],
    [0.00000000011, 3.72062261949, 7079.61767429131],
    [0.0000000001, 2.89167021825, 5507.7970561509],
    [0.0000000001, 1.46762801985, 11790.8729061423],
    [0.00000000009, 6.21784065295, 11507.0135872771],
    [0.00000000011, 4.68801103302, 12592.6938372661],
    [0.00000000009, 3.82179163254, 7058.8422787989],
    [0.00000000008, 5.97770881958, 6290.4332144757],
    [0.00000000008, 0.68313431813, 6276.2061204741],
    [0.00000000008, 1.45990791265, 796.5418242999],
    [0.00000000007, 4.15465801739, 4693.75913722409],
    [0.00000000007, 0.35078036011, 7.3573644843],
    [0.00000000005, 3.29483739022, 3739.0052475915],
    [0.00000000005, 4.64160679165, 6070.0205720369],
    [0.00000000006, 2.38483297622, 6284.2999885431],
    [0.00000000006, 4.26851560652, 6282.3393464067],
    [0.00000000005, 1.89668032657, 4137.1542509997],
    [0.00000000005, 2.01213704309, 6496.6187629129],
];

const Y4: &[Term] = &[
    [0.00000114918, 4.77291921544, 6283.3196674749],
    [0.00000006817, 2.90545031303, 0.2438174835],
    [0.00000003158, 5.19149443854, 12566.3955174663],
    [0.00000000211, 2.15272014034, 6438.7400669091],
    [0.0000000021, 1.31410288968, 6127.8992680407],
    [0.00000000253, 5.35904773722, 18849.4713674577],
    [0.00000000073, 5.49456429263, 6282.83203250789],
    [0.00000000042, 3.03243163257, 710.1768660418],
    [0.00000000023, 4.47433896564, 6279.7965491259],
    [0.00000000022, 4.47061131203, 6286.84278582391],
    [0.00000000012, 5.22878976906, 25132.5472174491],
    [0.00000000009, 2.63928422881, 83997.09113559539],
    [0.00000000009, 3.62312855703, 11856.462468908],
    [0.00000000008, 4.59507616558, 167284.005405149],
    [0.00000000005, 4.40834364231, 6257.0213476751],
    [0.00000000005, 2.21798830782, 6309.61798727471],
    [0.00000000005, 1.11835906029, 12410.9751180321],
    [0.00000000005, 3.99770824807, 156137.71980228278],
    [0.00000000004, 4.97197978751, 12565.9078824993],
    [0.00000000003, 3.60141861387, 529.9347825781],
];

const Y5: &[Term] = &[
    [0.00000000877, 4.87375194107, 6283.3196674749],
    [0.00000000305, 4.05893642248, 0.2438174835],
    [0.00000000101, 3.3099706647, 12566.3955174663],
    [0.00000000025, 3.73514325706, 6438.7400669091],
    [0.00000000025, 5.99118011879, 6127.8992680407],
    [0.0000000001, 3.54319653898, 18849.4713674577],
    [0.00000000003, 4.13285368647, 6282.83203250789],
];

const Z0: &[Term] = &[
    [0.0000027962, 3.19870156017, 84334.66158130829],
    [0.00000101625, 5.42248110597, 5507.5532386674],
    [0.00000080461, 3.88027157914, 5223.6939198022],
    [0.00000043855, 3.70430347723, 2352.8661537718],
    [0.00000031853, 3.99997840986, 1577.3435424478],
    [0.00000022724, 3.9847383156, 1047.7473117547],
    [0.00000016395, 3.56456162523, 5856.4776591154],
    [0.0000001815, 4.98479613321, 6283.0758499914],
    [0.00000014477, 3.70258423465, 9437.762934887],
    [0.00000014325, 3.41020246931, 10213.285546211],
    [0.00000011204, 4.83021499098, 14143.4952424306],
    [0.00000010896, 2.08023708321, 6812.766815086],
    [0.00000009716, 3.47560205064, 4694.0029547076],
    [0.00000010363, 4.05663928093, 71092.88135493269],
    [0.00000008792, 4.4489072928, 5753.3848848968],
    [0.00000008337, 4.99167706048, 7084.8967811152],
    [0.00000006921, 4.32559054073, 6275.9623029906],
    [0.00000009145, 1.14182646613, 6620.8901131878],
    [0.00000007205, 3.62441599378, 529.6909650946],
    [0.00000007698, 5.55425745881, 167621.5758508619],
    [0.00000005186, 6.25384533126, 18073.7049386502],
    [0.00000005027, 2.49727910749, 4705.7323075436],
    [0.00000004529, 2.33827747356, 6309.3741697912],
    [0.00000004754, 0.71100829534, 5884.9268465832],
    [0.00000004292, 1.10034019036, 6681.2248533996],
    [0.00000003855, 1.8233147776, 5486.777843175],
    [0.00000005256, 4.42445744523, 7860.4193924392],
    [0.00000004025, 5.11990285618, 13367.9726311066],
    [0.00000004061, 6.02923989849, 3930.2096962196],
    [0.00000003798, 0.44370219832, 3154.6870848956],
    [0.00000002933, 5.12428135363, 1059.3819301892],
    [0.00000003424, 5.420651917, 6069.7767545534],
    [0.0000000367, 4.58210192227, 12194.0329146209],
    [0.00000002912, 1.92688087702, 10977.078804699],
    [0.00000002506, 0.60484952637, 6496.3749454294],
    [0.0000000268, 1.39497359287, 22003.9146348698],
    [0.0000000212, 4.30691000285, 5643.1785636774],
    [0.00000002235, 0.81363184041, 8635.9420037632],
    [0.00000001819, 3.75748003107, 3340.6124266998],
    [0.0000000223, 2.76407822446, 12036.4607348882],
    [0.00000001945, 5.69949789177, 11790.6290886588],
    [0.00000001529, 1.98639348122, 398.1490034082],
    [0.00000001581, 3.19976230948, 5088.6288397668],
    [0.00000001424, 6.26116472313, 2544.3144198834],
    [0.00000001405, 4.69394873481, 7058.5984613154],
    [0.00000001588, 0.25704624784, 17298.1823273262],
    [0.00000001478, 2.81808207569, 25934.1243310894],
    [0.00000001693, 4.95689385293, 156475.2902479957],
    [0.00000001123, 2.38605285936, 3738.761430108],
    [0.0000000099, 4.29600699156, 9225.539273283],
    [0.00000000923, 3.07195736431, 4164.311989613],
    [0.00000000863, 0.55119493097, 8429.2412664666],
    [0.00000000984, 5.96784225392, 7079.3738568078],
    [0.00000001086, PI, 0.0],
    [0.00000000824, 1.50050055147, 10447.3878396044],
    [0.00000000829, 3.51336978167, 11506.7697697936],
    [0.00000000908, 0.12102885474, 11015.1064773348],
    [0.00000000742, 1.99159139281, 26087.9031415742],
    [0.0000000085, 4.24120016095, 29864.334027309],
    [0.00000000762, 2.90028034892, 4732.0306273434],
    [0.00000000711, 1.38596151724, 2146.1654164752],
    [0.00000000766, 0.61397570576, 796.2980068164],
    [0.00000000708, 1.91406542362, 8031.0922630584],
    [0.0000000081, 5.13961498599, 2942.4634232916],
    [0.00000000751, 1.67479850166, 21228.3920235458],
    [0.00000000589, 2.02193316047, 775.522611324],
    [0.00000000513, 2.60734651128, 12566.1516999828],
    [0.0000000055, 1.61119298963, 801.8209311238],
    [0.00000000592, 4.59481504319, 4690.4798363586],
    [0.00000000519, 5.72925039114, 8827.3902698748],
    [0.00000000515, 4.09976487552, 64809.80550494129],
    [0.00000000503, 5.66433137112, 33794.5437235286],
    [0.00000000476, 3.69640472448, 213.299095438],
    [0.00000000463, 1.24987240483, 15720.8387848784],
    [0.00000000411, 0.10769444525, 3128.3887650958],
    [0.00000000504, 3.2620766916, 7632.9432596502],
    [0.00000000552, 1.02926440457, 239762.20451754928],
    [0.00000000394, 5.81496021156, 426.598190876],
    [0.00000000476, 3.52810472421, 16496.3613962024],
    [0.00000000503, 4.85802444134, 6290.1893969922],
    [0.00000000417, 0.81920713533, 5216.5803728014],
    [0.00000000363, 5.70015720452, 1589.0728952838],
    [0.00000000363, 1.28376436579, 6206.8097787158],
    [0.00000000353, 4.7005913311, 7234.794256242],
    [0.00000000381, 2.61890749829, 7342.4577801806],
    [0.0000000042, 0.97821135132, 4136.9104335162],
    [0.00000000335, 6.2205796732, 12168.0026965746],
    [0.00000000387, 3.09145061418, 25158.6017197654],
    [0.00000000349, 2.94840720073, 9623.6882766912],
    [0.00000000418, 3.75759994446, 5230.807466803],
    [0.00000000396, 1.22507712354, 6438.4962494256],
    [0.00000000322, 1.21162178805, 8662.240323563],
    [0.00000000323, 5.50254808471, 1194.4470102246],
    [0.00000000372, 1.72256107938, 14945.3161735544],
    [0.00000000305, 0.80429352049, 37724.7534197482],
    [0.00000000265, 6.10358507671, 6836.6452528338],
    [0.0000000025, 4.56452895547, 7477.522860216],
    [0.00000000266, 2.62926282354, 7238.6755916],
    [0.00000000262, 1.34297269105, 11769.8536931664],
    [0.00000000263, 6.22089501237, 6133.5126528568],
    [0.00000000302, 2.81139045072, 1748.016413067],
    [0.00000000316, 1.62662805006, 250908.4901204155],
    [0.00000000226, 2.42346415873, 11371.7046897582],
    [0.00000000216, 3.68721275185, 5849.3641121146],
    [0.00000000276, 2.33399767923, 19651.048481098],
    [0.0000000023, 0.36165162947, 5863.5912061162],
    [0.000000002, 5.86073159059, 4535.0594369244],
    [0.00000000277, 4.65400292395, 82239.1669577989],
    [0.00000000199, 5.05186622555, 5429.8794682394],
    [0.00000000206, 3.70556027982, 10973.55568635],
    [0.0000000021, 4.50691909144, 29088.811415985],
    [0.00000000181, 6.00294783127, 4292.3308329504],
    [0.00000000249, 0.12900984422, 154379.7956244863],
    [0.00000000167, 6.27348370813, 10988.808157535],
    [0.00000000183, 3.19836584401, 16730.4636895958],
    [0.00000000225, 3.18339652605, 18875.525869774],
    [0.00000000192, 0.87192032514, 77375.95720492408],
    [0.00000000188, 2.22746128596, 41654.9631159678],
    [0.0000000016, 5.20207795189, 5481.2549188676],
    [0.00000000192, 3.89678943865, 17789.845619785],
    [0.00000000159, 5.32590846475, 7.1135470008],
    [0.00000000214, 4.08171403539, 337.8142631964],
    [0.00000000184, 3.75465072369, 23581.2581773176],
    [0.0000000016, 4.5389752997, 18477.1087646123],
    [0.00000000144, 5.19486374726, 20426.571092422],
    [0.00000000126, 1.69446958184, 15110.4661198662],
    [0.00000000149, 1.55306832217, 10021.8372800994],
    [0.00000000127, 5.31068233515, 639.897286314],
    [0.00000000118, 2.73268114062, 18849.2275499742],
    [0.00000000123, 2.55361087146, 12592.4500197826],
    [0.00000000113, 6.07178776726, 6709.6740408674],
    [0.0000000013, 3.94161517411, 7330.8231617461],
    [0.0000000011, 3.51203379263, 18052.9295431578],
    [0.00000000147, 4.63371971408, 22805.7355659936],
    [0.00000000113, 1.20711498905, 14919.0178537546],
    [0.00000000108, 3.76359880753, 14314.1681130498],
    [0.00000000148, 0.65447253687, 95480.9471841745],
    [0.00000000121, 3.13748782783, 14712.317116458],
    [0.00000000119, 5.92110458985, 33019.0211122046],
    [0.00000000124, 2.9363842184, 32217.2001810808],
    [0.00000000117, 3.6506527164, 45585.1728121874],
    [0.00000000127, 4.74596574209, 49515.382508407],
    [0.0000000012, 1.04211499785, 6915.8595893046],
    [0.0000000012, 5.60638811846, 5650.2921106782],
    [0.00000000127, 2.70766997307, 12352.8526045448],
    [0.00000000113, 5.39691616452, 5235.3285382367],
    [0.00000000097, 1.07908724794, 9917.6968745098],
    [0.00000000123, 5.15992792934, 27511.4678735372],
    [0.00000000099, 4.45774681732, 4933.2084403326],
    [0.00000000087, 3.9363781295, 17654.7805397496],
    [0.00000000122, 2.2395606868, 83997.09113559539],
    [0.00000000102, 3.97386522171, 10818.1352869158],
    [0.00000000084, 4.21241958885, 22779.4372461938],
    [0.00000000103, 4.63519841733, 1349.8674096588],
    [0.00000000081, 4.0165524043, 1592.5960136328],
    [0.00000000092, 3.24182657569, 78051.5857313169],
    [0.00000000094, 4.338739728, 36147.4098773004],
    [0.00000000076, 2.8389755442, 17260.1546546904],
    [0.000000001, 6.07733097102, 26735.9452622132],
    [0.00000000078, 0.72462427283, 12779.4507954208],
    [0.00000000086, 5.2602963825, 28313.288804661],
    [0.00000000093, 4.31900620254, 44809.6502008634],
    [0.00000000076, 6.22743405935, 13521.7514415914],
    [0.00000000081, 2.16420552322, 13095.8426650774],
    [0.000000001, 1.38002787119, 28286.9904848612],
    [0.00000000072, 1.55820597747, 6256.7775301916],
    [0.00000000082, 4.95202664555, 10575.4066829418],
    [0.00000000082, 1.69647647075, 1990.745017041],
    [0.00000000096, 6.16038106485, 24356.7807886416],
    [0.00000000075, 2.29836095644, 3634.6210245184],
    [0.00000000075, 2.66367876557, 16200.7727245012],
    [0.00000000087, 0.26630214764, 31441.6775697568],
    [0.0000000008, 5.00001604436, 150192.2143980043],
    [0.00000000079, 0.01398391548, 90617.7374312997],
    [0.00000000054, 5.59738773448, 161338.5000008705],
    [0.00000000056, 2.60133794851, 73188.3759784421],
    [0.00000000055, 5.81483150022, 143233.51002162008],
    [0.00000000054, 3.38482031504, 323049.11878710287],
];

const Z1: &[Term] = &[
    [0.00000009031, 3.89751156799, 5507.5532386674],
    [0.00000006179, 1.73051337995, 5223.6939198022],
    [0.00000003793, 5.24575814515, 2352.8661537718],
    [0.0000000284, 2.47694599818, 1577.3435424478],
    [0.00000001817, 0.41874743765, 6283.0758499914],
    [0.00000001499, 1.83320979291, 5856.4776591154],
    [0.00000001463, 5.68891324948, 5753.3848848968],
    [0.00000001302, 2.18800611215, 9437.762934887],
    [0.00000001239, 4.95327097854, 10213.285546211],
    [0.00000001029, 0.09367831611, 7860.4193924392],
    [0.00000000975, 0.0883325688, 14143.4952424306],
    [0.00000000851, 1.79547916132, 3930.2096962196],
    [0.00000000581, 2.26949174067, 5884.9268465832],
    [0.00000000515, 5.64196681593, 529.6909650946],
    [0.00000000473, 6.22750969242, 6309.3741697912],
    [0.00000000449, 1.52767374606, 18073.7049386502],
    [0.0000000036, 3.62344325932, 13367.9726311066],
    [0.00000000372, 3.2247072132, 6275.9623029906],
    [0.0000000026, 1.87645933242, 11790.6290886588],
    [0.00000000322, 0.94084045832, 6069.7767545534],
    [0.00000000232, 0.27531852596, 7058.5984613154],
    [0.00000000217, 6.03652873142, 10977.078804699],
    [0.00000000232, 2.93325646109, 22003.9146348698],
    [0.00000000204, 3.86264841382, 6496.3749454294],
    [0.00000000189, 2.88937704419, 15720.8387848784],
    [0.00000000179, 4.90537280911, 12036.4607348882],
    [0.00000000222, 3.98495366315, 6812.766815086],
    [0.00000000213, 1.57516933652, 4694.0029547076],
    [0.00000000157, 1.08259734788, 5643.1785636774],
    [0.00000000154, 5.99434678412, 5486.777843175],
    [0.00000000137, 2.67760436027, 6290.1893969922],
    [0.00000000179, 2.05905949693, 7084.8967811152],
    [0.00000000121, 5.90212574947, 9225.539273283],
    [0.00000000125, 2.24111392416, 1059.3819301892],
    [0.0000000015, 2.00175038718, 5230.807466803],
    [0.00000000149, 5.06157254516, 17298.1823273262],
    [0.00000000118, 5.39979058038, 3340.6124266998],
    [0.00000000161, 3.32421999691, 6283.3196674749],
    [0.00000000115, 5.92406672373, 4705.7323075436],
    [0.00000000118, 4.40207874911, 19651.048481098],
    [0.00000000128, 4.35489873365, 25934.1243310894],
    [0.00000000109, 2.52157834166, 6438.4962494256],
    [0.00000000099, 2.70727488041, 5216.5803728014],
    [0.00000000122, 0.0, 0.0],
    [0.00000000103, 0.93782340879, 8827.3902698748],
    [0.00000000083, 4.12473540351, 8635.9420037632],
    [0.00000000097, 5.50959692365, 29864.334027309],
    [0.00000000073, 1.73905345744, 11506.7697697936],
    [0.00000000083, 5.69169692653, 775.522611324],
    [0.00000000072, 0.21891639822, 21228.3920235458],
    [0.00000000071, 2.86755026812, 6681.2248533996],
    [0.00000000074, 2.20184828895, 37724.7534197482],
    [0.00000000063, 4.45586625948, 7079.3738568078],
    [0.00000000047, 2.04946724464, 3128.3887650958],
    [0.00000000061, 0.63918772258, 33794.5437235286],
    [0.00000000047, 3.325438433, 26087.9031415742],
    [0.00000000049, 1.60680905005, 6702.5604938666],
    [0.00000000057, 0.11215813438, 29088.811415985],
    [0.00000000049, 3.0283220405, 20426.571092422],
    [0.00000000041, 5.5532939489, 11015.1064773348],
    [0.00000000041, 5.91861144924, 23581.2581773176],
    [0.00000000045, 2.00068583743, 426.598190876],
    [0.00000000045, 4.95273290181, 5863.5912061162],
    [0.0000000005, 3.62740835096, 41654.9631159678],
    [0.00000000046, 1.65798680284, 25158.6017197654],
    [0.00000000036, 5.61836577943, 12566.1516999828],
    [0.00000000036, 6.24373396652, 6283.14316029419],
    [0.00000000036, 0.40465162918, 6283.0085396886],
    [0.00000000032, 6.09025731476, 64809.80550494129],
    [0.00000000032, 6.03707103538, 2942.4634232916],
    [0.00000000041, 4.86809570283, 1592.5960136328],
    [0.00000000037, 1.04055368426, 213.299095438],
    [0.00000000031, 3.6264114503, 13095.8426650774],
    [0.00000000028, 4.38359423735, 7632.9432596502],
    [0.0000000003, 2.03616887071, 12139.5535091068],
    [0.00000000028, 6.03334294232, 17789.845619785],
    [0.00000000026, 3.88971333608, 5331.3574437408],
    [0.00000000031, 1.44666331503, 16730.4636895958],
    [0.00000000026, 6.26376705837, 23543.23050468179],
    [0.00000000023, 4.4438898555, 18849.2275499742],
    [0.00000000025, 4.13395006026, 3154.6870848956],
    [0.00000000028, 1.53862289477, 6279.4854213396],
    [0.00000000028, 1.96831814872, 6286.6662786432],
    [0.00000000028, 5.78094918529, 15110.4661198662],
    [0.00000000025, 0.62040343662, 10988.808157535],
    [0.00000000022, 6.02390113954, 16496.3613962024],
    [0.00000000026, 2.48165809843, 5729.506447149],
    [0.0000000002, 3.85655029499, 9623.6882766912],
    [0.00000000021, 5.83006047147, 7234.794256242],
    [0.00000000021, 0.69628570421, 398.1490034082],
    [0.00000000022, 5.02222806555, 6127.6554505572],
    [0.0000000002, 3.4761126529, 6148.010769956],
    [0.0000000002, 0.90769829044, 5481.2549188676],
    [0.0000000002, 0.03081589303, 6418.1409300268],
    [0.0000000002, 3.74220084927, 1589.0728952838],
    [0.00000000018, 1.58348238359, 2118.7638603784],
    [0.00000000019, 0.85407021371, 14712.317116458],
];

const Z2: &[Term] = &[
    [0.00000001662, 1.62703209173, 84334.66158130829],
    [0.00000000492, 2.41382223971, 1047.7473117547],
    [0.00000000344, 2.24353004539, 5507.5532386674],
    [0.00000000258, 6.00906896311, 5223.6939198022],
    [0.00000000131, 0.9544734524, 6283.0758499914],
    [0.00000000086, 1.69139956945, 7860.4193924392],
    [0.0000000009, 0.97606804452, 1577.3435424478],
    [0.0000000009, 0.37899871725, 2352.8661537718],
    [0.00000000089, 6.25807507963, 10213.285546211],
    [0.00000000075, 0.84213523741, 167621.5758508619],
    [0.00000000052, 1.70501566089, 14143.4952424306],
    [0.00000000057, 6.15295833679, 12194.0329146209],
    [0.00000000051, 1.2761601674, 5753.3848848968],
    [0.00000000051, 5.37229738682, 6812.766815086],
    [0.00000000034, 1.73672994279, 7058.5984613154],
    [0.00000000038, 2.77761031485, 10988.808157535],
    [0.00000000046, 3.38617099014, 156475.2902479957],
    [0.00000000021, 1.95248349228, 8827.3902698748],
    [0.00000000018, 3.33419222028, 8429.2412664666],
    [0.00000000019, 4.32945160287, 17789.845619785],
    [0.00000000017, 0.66191210656, 6283.0085396886],
    [0.00000000018, 3.74885333072, 11769.8536931664],
    [0.00000000017, 4.23058370776, 10977.078804699],
    [0.00000000017, 1.78116162721, 5486.777843175],
    [0.00000000018, 6.14348240716, 11790.6290886588],
    [0.00000000022, 1.34376831204, 12036.4607348882],
    [0.00000000017, 2.79601092529, 796.2980068164],
    [0.00000000015, 1.17032155085, 213.299095438],
    [0.00000000018, 2.85221514199, 5088.6288397668],
    [0.00000000017, 0.21780913672, 6283.14316029419],
    [0.00000000013, 1.21201504386, 25132.3033999656],
    [0.00000000012, 5.13714452592, 7079.3738568078],
    [0.00000000013, 3.79842135217, 4933.2084403326],
    [0.00000000012, 4.89407978213, 3738.761430108],
    [0.00000000015, 6.05682328852, 398.1490034082],
    [0.00000000014, 4.81029291856, 4694.0029547076],
    [0.00000000011, 0.61684523405, 3128.3887650958],
    [0.00000000011, 5.328765385, 6040.3472460174],
    [0.00000000014, 5.27227350286, 4535.0594369244],
    [0.00000000011, 2.39292099451, 5331.3574437408],
    [0.0000000001, 4.4529653271, 6525.8044539654],
    [0.00000000014, 4.66400985037, 8031.0922630584],
    [0.0000000001, 3.22472385926, 9437.762934887],
    [0.00000000011, 3.80913404437, 801.8209311238],
    [0.0000000001, 5.15032130575, 11371.7046897582],
    [0.00000000013, 0.98720797401, 5729.506447149],
    [0.00000000009, 5.94191743597, 7632.9432596502],
];

const Z3: &[Term] = &[
    [0.00000000011, 0.23877262399, 7860.4193924392],
    [0.00000000009, 1.16069982609, 5507.5532386674],
    [0.00000000008, 1.65357552925, 5884.9268465832],
    [0.00000000008, 2.86720038197, 7058.5984613154],
    [0.00000000007, 3.04818741666, 5486.777843175],
    [0.00000000007, 2.59437103785, 529.6909650946],
    [0.00000000008, 4.02863090524, 6256.7775301916],
    [0.00000000008, 2.42003508927, 5753.3848848968],
    [0.00000000006, 0.84181087594, 6275.9623029906],
    [0.00000000006, 5.40160929468, 1577.3435424478],
    [0.00000000007, 2.73399865247, 6309.3741697912],
];

pub static EARTH: Vsop87Table = Vsop87Table {
    variables: Variables::Rectangular,
    reference: Reference::EclipticOfDate,
    series: [
        &[X0, X1, X2, X3, X4, X5],
        &[Y0, Y1, Y2, Y3, Y4, Y5],
        &[Z0, Z1, Z2, Z3],
    ],
};
