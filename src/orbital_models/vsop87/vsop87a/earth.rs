//! VSOP87A series for Earth: heliocentric X, Y, Z on the ecliptic and equinox J2000.

use std::f64::consts::PI;

use super::super::{Reference, Term, Variables, Vsop87Table};

const X0: &[Term] = &[
    [0.99982928844, 1.75348568475, 6283.0758499914],
    [0.008352573, 1.7103453945, 12566.1516999828],
    [0.00561144206, 0.0, 0.0],
    [0.00010466628, 1.66722645223, 18849.2275499742],
    [0.00003110838, 0.66875185215, 83996.84731811189],
    [0.00002552498, 0.58310207301, 529.6909650946],
    [0.00002137256, 1.09235189672, 1577.3435424478],
    [0.00001709103, 0.49540223397, 6279.5527316424],
    [0.00001707882, 6.15315547484, 6286.5989683404],
    [0.00001445242, 3.4727278376, 2352.8661537718],
    [0.00001091006, 3.68984782465, 5223.6939198022],
    [0.00000934429, 6.07389922585, 12036.4607348882],
    [0.00000899144, 3.17571950523, 10213.285546211],
    [0.00000566514, 2.15262034016, 1059.3819301892],
    [0.00000684416, 1.30699021227, 5753.3848848968],
    [0.00000734455, 4.3550019653, 398.1490034082],
    [0.00000681437, 2.21821534685, 4705.7323075436],
    [0.00000611238, 5.38479234323, 6812.766815086],
    [0.00000451836, 6.08768280868, 5884.9268465832],
    [0.00000451953, 1.27933728354, 6256.7775301916],
    [0.00000449517, 5.36923831714, 6309.3741697912],
    [0.00000406248, 0.54361367084, 6681.2248533996],
    [0.00000540957, 0.78677364655, 775.522611324],
    [0.00000547004, 1.46146650376, 14143.4952424306],
    [0.00000520484, 4.43295799975, 7860.4193924392],
    [0.0000021496, 4.50213844573, 11506.7697697936],
    [0.00000227892, 1.23941482802, 7058.5984613154],
    [0.00000225878, 3.27244306207, 4694.0029547076],
    [0.0000025582, 2.26556277246, 12168.0026965746],
    [0.00000256182, 1.4547411619, 709.9330485583],
    [0.0000017812, 2.96205424204, 796.2980068164],
    [0.00000161205, 1.47337718956, 5486.777843175],
    [0.00000178325, 6.24374704602, 6283.14316029419],
    [0.00000178325, 0.40466470869, 6283.0085396886],
    [0.00000155487, 1.62409309523, 25132.3033999656],
    [0.00000209024, 5.85207528073, 11790.6290886588],
    [0.00000199971, 4.07209938245, 17789.845619785],
    [0.00000128933, 5.2169331415, 7079.3738568078],
    [0.00000128099, 4.80182882228, 3738.761430108],
    [0.00000151691, 0.86921639327, 213.299095438],
    [0.00000094483, 4.60187620729, 10977.078804699],
    [0.00000077801, 1.844447972, 8827.3902698748],
    [0.00000077277, 3.58396027325, 5507.5532386674],
    [0.00000073493, 2.69522392584, 1589.0728952838],
    [0.00000065359, 3.6515634797, 11769.8536931664],
    [0.0000006324, 2.24124130944, 6262.300454499],
    [0.00000062961, 4.40729381941, 6303.8512454838],
    [0.0000008587, 3.0243077314, 167283.7615876655],
    [0.00000082957, 6.1925490884, 3340.6124266998],
    [0.00000079201, 2.49366716519, 6069.7767545534],
    [0.00000060048, 3.39951805979, 4136.9104335162],
    [0.00000062119, 2.01472298915, 7.1135470008],
    [0.00000075601, 4.15956023781, 6496.3749454294],
    [0.00000067771, 4.03416283669, 9437.762934887],
    [0.00000053715, 1.56222706033, 1194.4470102246],
    [0.00000057574, 2.6788176695, 6282.0955289232],
    [0.00000057574, 3.96971590315, 6284.0561710596],
    [0.00000051129, 1.3125552235, 6290.1893969922],
    [0.00000050529, 5.34827650648, 6275.9623029906],
    [0.00000049613, 2.64370071484, 6127.6554505572],
    [0.00000048085, 4.0088619738, 6438.4962494256],
    [0.0000005734, 3.79459979103, 3154.6870848956],
    [0.00000047378, 6.10705175562, 3128.3887650958],
    [0.00000048104, 4.77180566934, 801.8209311238],
    [0.00000041149, 3.3272630219, 8429.2412664666],
    [0.00000052309, 5.30571599873, 13367.9726311066],
    [0.00000051321, 5.78450026632, 12352.8526045448],
    [0.00000050648, 2.05206551992, 11856.2186514245],
    [0.00000043381, 3.64501749522, 17260.1546546904],
    [0.00000039554, 4.93022392385, 5481.2549188676],
    [0.00000048969, 0.45418080759, 9225.539273283],
    [0.00000047568, 3.16123585999, 5856.4776591154],
    [0.00000047271, 0.62147119447, 2544.3144198834],
    [0.00000037987, 3.04100734504, 426.598190876],
    [0.00000032481, 0.8095726352, 3930.2096962196],
    [0.00000032559, 1.97427864771, 2146.1654164752],
    [0.00000032521, 2.84566871337, 4164.311989613],
    [0.00000032546, 3.01796808307, 5088.6288397668],
    [0.00000028515, 6.10933021271, 12569.6748183318],
    [0.00000036898, 2.91097134183, 18073.7049386502],
    [0.00000024936, 2.17935828787, 26.2983197998],
    [0.00000030322, 1.99340330773, 4535.0594369244],
    [0.00000028166, 0.4812732525, 12562.6285816338],
    [0.0000002188, 5.1263508859, 11371.7046897582],
    [0.00000021642, 4.63524156478, 12559.038152982],
    [0.0000002048, 1.46713660207, 7084.8967811152],
    [0.00000026112, 0.30447108865, 71430.69561812909],
    [0.00000022867, 4.76437399404, 8031.0922630584],
    [0.00000018593, 3.3841579586, 1748.016413067],
    [0.0000002325, 6.19030311409, 18319.5365848796],
    [0.00000017104, 0.58684867006, 4933.2084403326],
    [0.00000021687, 4.30348901447, 10447.3878396044],
    [0.00000021065, 3.80028088787, 7477.522860216],
    [0.00000014285, 1.2952860784, 2942.4634232916],
    [0.00000013898, 4.59171958613, 8635.9420037632],
    [0.0000001922, 0.49428010004, 17298.1823273262],
    [0.00000018884, 2.42694414831, 156137.47598479927],
    [0.00000017889, 0.15750451509, 1592.5960136328],
    [0.00000013605, 5.19721055627, 13095.8426650774],
    [0.00000015049, 3.1208409605, 16496.3613962024],
    [0.00000013852, 6.16243027421, 7632.9432596502],
    [0.00000014421, 1.43791851415, 20426.571092422],
    [0.00000013247, 3.60768174652, 12139.5535091068],
    [0.00000011583, 5.46076026245, 5331.3574437408],
    [0.00000014329, 6.02791958133, 7342.4577801806],
    [0.00000012375, 3.10941923273, 6279.4854213396],
    [0.00000012366, 3.53911446434, 6286.6662786432],
    [0.00000009951, 1.25735916596, 7234.794256242],
    [0.00000012425, 1.06396563046, 15110.4661198662],
    [0.00000011004, 2.1927672324, 10988.808157535],
    [0.00000011583, 4.05256206393, 5729.506447149],
    [0.00000009046, 5.43016645841, 9623.6882766912],
    [0.00000008869, 5.04690941813, 6148.010769956],
    [0.00000010507, 2.6275802506, 6836.6452528338],
    [0.00000011129, 4.17728063171, 15720.8387848784],
    [0.00000008614, 1.60161176919, 6418.1409300268],
    [0.00000008532, 2.46198384967, 14712.317116458],
    [0.0000000791, 3.15429574843, 2118.7638603784],
    [0.00000010546, 4.79503596728, 1349.8674096588],
    [0.0000001048, 2.95288908781, 5999.2165311262],
    [0.00000007456, 5.42522643084, 6040.3472460174],
    [0.0000000982, 3.69556194245, 6566.9351688566],
    [0.00000009171, 3.92216439653, 5643.1785636774],
    [0.00000007018, 1.23420199826, 6525.8044539654],
    [0.00000009797, 1.91951822764, 21228.3920235458],
    [0.0000000906, 4.61643194755, 4690.4798363586],
    [0.00000007545, 1.23604549224, 12539.853380183],
    [0.00000008227, 0.32929613711, 10973.55568635],
    [0.00000007202, 5.88391543785, 6245.0481773556],
    [0.00000007144, 0.76464650349, 6321.1035226272],
    [0.00000006625, 0.70112927898, 5327.4761083828],
    [0.00000007412, 5.03197290869, 23543.23050468179],
    [0.0000000616, 0.94570829909, 12964.300703391],
    [0.00000006378, 6.20903842618, 951.7184062506],
    [0.00000006359, 5.03541261021, 1990.745017041],
    [0.00000007254, 3.57690549862, 536.8045120954],
    [0.00000005777, 6.1016405996, 955.5997416086],
    [0.00000006393, 3.97543391449, 24072.9214697764],
    [0.00000006927, 0.71517687323, 522.5774180938],
    [0.00000007793, 4.30411864972, 22003.9146348698],
    [0.00000006346, 3.50687769075, 5230.807466803],
    [0.00000007534, 3.51457135016, 18422.62935909819],
    [0.00000006953, 2.74384548965, 155.4203994342],
    [0.00000006224, 2.24416723229, 18451.07854656599],
    [0.0000000583, 2.32860514691, 639.897286314],
    [0.00000005762, 3.49866583471, 1551.045222648],
    [0.00000006251, 4.45479090841, 6288.5987742988],
    [0.00000006251, 2.19374266424, 6277.552925684],
    [0.00000006278, 0.64265846614, 5216.5803728014],
    [0.00000006405, 2.25334669847, 5650.2921106782],
    [0.00000006545, 1.98229464447, 103.0927742186],
    [0.00000004737, 3.74210997787, 14314.1681130498],
    [0.00000004646, 1.33492108974, 553.5694028424],
    [0.00000006263, 4.39529396163, 26087.9031415742],
    [0.00000006196, 2.58704269072, 84672.47584450469],
    [0.0000000616, 4.78249950381, 239424.39025435288],
    [0.00000004988, 0.73122576373, 77713.7714681205],
    [0.00000005414, 2.9996195788, 6179.9830757728],
    [0.00000005414, 3.6542482069, 6386.16862421],
    [0.00000004863, 3.76722340488, 90279.92316810328],
    [0.00000005711, 4.32714492993, 6915.8595893046],
    [0.00000004269, 2.38367994999, 7875.6718636242],
    [0.00000004017, 3.78580907612, 6254.6266625236],
    [0.00000004067, 2.42033776129, 3634.6210245184],
    [0.00000003993, 2.86272124248, 6311.5250374592],
    [0.00000005305, 3.3435917292, 25158.6017197654],
    [0.00000004804, 2.82827032932, 5760.4984318976],
    [0.00000004349, 5.62752376053, 7238.6755916],
    [0.00000004119, 3.29663921982, 6709.6740408674],
    [0.00000004024, 0.55473527406, 11015.1064773348],
    [0.00000004409, 3.80563977803, 6805.6532680852],
    [0.00000003348, 3.54433469125, 12592.4500197826],
    [0.00000003172, 5.19146555016, 1066.49547719],
    [0.00000003532, 3.92898013298, 9917.6968745098],
    [0.0000000358, 4.19680692038, 11926.2544136688],
    [0.00000003336, 1.79793376416, 10575.4066829418],
    [0.00000003149, 6.21487368875, 4292.3308329504],
    [0.00000003899, 5.53698997029, 74.7815985673],
    [0.00000002979, 6.20067573402, 12566.2190102856],
    [0.00000003981, 1.19685195313, 13341.6743113068],
    [0.00000003025, 3.18620101831, 18052.9295431578],
    [0.00000003624, 5.60981856994, 6208.2942514241],
    [0.00000003581, 1.0399523122, 6357.8574485587],
    [0.00000003698, 5.22105764023, 5966.6839803348],
    [0.00000002793, 4.13369432245, 3.523118349],
    [0.00000003626, 1.42632163253, 6599.467719648],
    [0.00000003625, 3.00192353938, 6019.9919266186],
    [0.00000002611, 2.43263787635, 6702.5604938666],
    [0.00000002535, 1.58310693201, 31415.379249957],
    [0.0000000352, 5.37986364075, 250570.6758572191],
    [0.00000002593, 4.91225714775, 16730.4636895958],
    [0.00000003434, 3.64656881585, 6546.1597733642],
    [0.00000002788, 3.30835728306, 12721.572099417],
    [0.00000003383, 1.74748489437, 14945.3161735544],
    [0.00000002653, 4.42220751136, 5863.5912061162],
    [0.00000003049, 0.02765893726, 4732.0306273434],
    [0.00000002378, 3.62936279948, 2388.8940204492],
    [0.00000002979, 0.36159339669, 12566.08438968],
    [0.00000002716, 3.06935305016, 12029.3471878874],
    [0.00000002216, 5.26633529197, 13362.4497067992],
    [0.00000003014, 4.76640877174, 29088.811415985],
    [0.00000002742, 5.06666852445, 13916.0191096416],
    [0.00000002265, 5.95706192557, 6076.8903015542],
    [0.00000002529, 5.94709040579, 12043.574281889],
    [0.00000002015, 2.48432243402, 6262.7205305926],
    [0.00000002218, 0.69324011482, 6489.2613984286],
    [0.00000002005, 4.164238891, 6303.4311693902],
    [0.00000002009, 4.09759324685, 4701.1165017084],
    [0.00000002105, 4.63993587835, 5746.271337896],
    [0.00000001937, 0.22112768064, 13521.7514415914],
    [0.00000002437, 6.12896014686, 149.5631971346],
    [0.00000002602, 4.28001549113, 4590.910180489],
    [0.00000001893, 5.66795892365, 6286.9571853494],
    [0.00000001893, 0.980574649, 6279.1945146334],
    [0.00000002156, 2.00898711721, 18139.2945014159],
    [0.00000002388, 0.13031678718, 1162.4747044078],
    [0.00000001962, 0.25060934155, 4686.8894077068],
    [0.00000002337, 4.40745417534, 10021.8372800994],
    [0.00000001884, 5.27011523204, 242.728603974],
    [0.00000002436, 4.40772141072, 95143.1329209781],
    [0.00000001759, 0.19888470443, 13517.8701062334],
    [0.00000002163, 1.41797947214, 6037.244203762],
    [0.00000002167, 4.72612563566, 23013.5395395872],
    [0.0000000225, 2.39728930597, 12669.2444742014],
    [0.00000002052, 5.23006568302, 6528.9074962208],
    [0.00000001774, 2.08484497348, 6819.8803620868],
    [0.00000001842, 0.34675193374, 65147.6197681377],
    [0.00000001549, 0.71612589777, 20.7753954924],
    [0.00000001543, 5.96098287839, 6272.4391846416],
    [0.00000001543, 0.68755069426, 6293.7125153412],
    [0.00000001727, 4.5067465969, 17654.7805397496],
    [0.00000001436, 2.99734831658, 110.2063212194],
    [0.00000001427, 1.68851809181, 13119.72110282519],
    [0.00000001395, 3.25347392533, 10177.2576795336],
    [0.00000001446, 2.26563038586, 1052.2683831884],
    [0.00000001819, 3.18848907826, 18875.525869774],
    [0.0000000174, 5.48710781556, 19651.048481098],
    [0.00000001794, 5.74176427744, 25934.1243310894],
    [0.000000018, 6.18908014275, 33019.0211122046],
    [0.00000001488, 5.67443981584, 76.2660712756],
    [0.00000001349, 5.75097793699, 6016.4688082696],
    [0.00000001477, 4.14004787537, 12779.4507954208],
    [0.00000001251, 1.50045769848, 3894.1818295422],
    [0.00000001492, 6.2297509057, 9411.4646150872],
    [0.00000001471, 5.75783391755, 18635.9284545362],
    [0.00000001672, 5.43726223249, 16200.7727245012],
    [0.00000001263, 0.9172897135, 12573.2652469836],
    [0.00000001366, 1.09160445123, 2379.1644735716],
    [0.00000001272, 0.89738866811, 6549.6828917132],
    [0.00000001274, 5.34253525843, 632.7837393132],
    [0.00000001156, 1.38847609016, 11499.6562227928],
    [0.00000001543, 4.26237609038, 18209.33026366019],
    [0.0000000146, 4.97233669659, 245.8316462294],
    [0.00000001253, 1.41164782, 6993.0088985497],
    [0.00000001455, 5.29534379992, 38.1330356378],
    [0.00000001228, 2.83750345253, 24356.7807886416],
    [0.00000001028, 2.51030023881, 6112.4029793722],
    [0.00000001268, 4.67217109478, 5429.8794682394],
    [0.00000001312, 1.10091569645, 12491.3701014155],
    [0.00000000992, 4.138177171, 6453.7487206106],
    [0.00000000988, 0.98006619973, 8273.8208670324],
    [0.00000001191, 3.21845317343, 6276.02961329339],
    [0.00000001191, 3.43008039922, 6290.1220866894],
    [0.00000000978, 4.73852763851, 6247.04798331399],
    [0.00000000971, 1.91000718426, 6319.1037166688],
    [0.00000000962, 2.63568544853, 12565.1713789146],
    [0.00000001025, 2.21768401152, 12545.3763044904],
    [0.00000001146, 3.85865009647, 206.1855484372],
    [0.00000000944, 0.78473810598, 6306.9542877392],
    [0.00000000944, 5.86379546667, 6259.1974122436],
    [0.00000001092, 3.92002105501, 17796.9591667858],
    [0.00000000886, 5.23132430543, 6172.869528772],
    [0.00000000859, 1.48130342803, 1692.1656695024],
    [0.00000001211, 4.04154480615, 82576.9812209953],
    [0.00000001132, 0.96198039943, 17782.7320727842],
    [0.00000000942, 1.42062620155, 6267.82337880639],
    [0.00000000942, 5.2279073711, 6298.3283211764],
    [0.00000001045, 0.46337213067, 15508.6151232744],
    [0.0000000085, 1.45204280805, 6393.2821712108],
    [0.00000000895, 2.40085098648, 3903.9113764198],
    [0.00000001016, 0.71504248238, 220.4126424388],
    [0.00000000853, 4.42455068314, 949.1756089698],
    [0.00000000917, 2.47015034331, 149854.4001348079],
    [0.00000001085, 1.32862144392, 36949.2308084242],
    [0.00000000779, 3.58339451743, 2648.454825473],
    [0.00000001, 0.24880432, 11403.676995575],
    [0.00000000962, 3.92658368218, 12567.132021051],
    [0.0000000077, 6.20173754399, 4804.209275927],
    [0.00000000986, 4.62897469531, 22805.7355659936],
    [0.00000000931, 2.22558469426, 2787.0430238574],
    [0.00000000743, 3.79903933428, 7834.1210726394],
    [0.00000000905, 3.81538816339, 6284.5603226997],
    [0.00000000905, 2.83314540925, 6281.5913772831],
    [0.00000000715, 5.50312651042, 17256.6315363414],
    [0.00000000798, 2.62501077543, 12410.7313005486],
    [0.00000000828, 1.54060095214, 10969.9652576982],
    [0.00000000821, 0.52122150189, 12416.5885028482],
    [0.00000000826, 4.78071938299, 10984.1923516998],
    [0.00000000754, 3.82898538792, 4061.2192153944],
    [0.00000000616, 5.70479516739, 1596.1864422846],
    [0.00000000723, 3.06755247513, 161000.6857376741],
    [0.00000000782, 0.8767675308, 4907.3020501456],
    [0.00000000707, 3.28533306159, 5849.3641121146],
    [0.00000000783, 3.4348155769, 846.0828347512],
    [0.00000000623, 2.94730498294, 5333.9002410216],
    [0.00000000696, 4.89623582044, 11712.9553182308],
    [0.00000000616, 1.47727208161, 5573.1428014331],
    [0.00000000595, 1.30546777768, 12323.4230960088],
    [0.00000000611, 1.31321200457, 11933.3679606696],
    [0.00000000611, 1.5315567945, 853.196381752],
    [0.0000000057, 4.54665961586, 12586.9270954752],
    [0.00000000778, 1.57590278073, 8662.240323563],
    [0.00000000597, 4.6931603842, 9779.1086761254],
    [0.00000000536, 6.06660590951, 18852.7506683232],
    [0.00000000532, 4.58762153412, 18842.11400297339],
    [0.00000000599, 2.11793250999, 6151.533888305],
    [0.0000000054, 3.40440707564, 6279.7894925736],
    [0.0000000054, 3.24412649701, 6286.3622074092],
    [0.00000000621, 1.14533482552, 52175.8062831484],
    [0.00000000513, 3.70291605445, 12455.9453787634],
    [0.00000000623, 5.52546598759, 5326.7866940208],
    [0.00000000649, 4.90568768794, 11764.330768859],
    [0.00000000582, 4.53092407532, 6414.6178116778],
    [0.0000000061, 3.9432083222, 10419.9862835076],
    [0.00000000679, 0.26045226696, 6133.5126528568],
    [0.00000000531, 3.00684541494, 3496.032826134],
    [0.00000000536, 3.70224967645, 7232.2514589612],
    [0.0000000051, 4.38198402315, 11513.8833167944],
    [0.00000000517, 2.93096521231, 433.7117378768],
    [0.00000000643, 6.0638258906, 26735.9452622132],
    [0.00000000665, 2.75085842376, 40879.4405046438],
    [0.00000000549, 0.63911798007, 22483.84857449259],
    [0.00000000479, 1.33580595339, 5547.1993364596],
    [0.00000000564, 3.92025647347, 4171.4255366138],
    [0.00000000462, 1.96611775944, 3104.9300594238],
    [0.00000000551, 4.03874430699, 6503.4884924302],
    [0.00000000535, 6.12277226234, 173566.83743765688],
    [0.00000000545, 2.61441075819, 6062.6632075526],
    [0.00000000477, 3.50657951584, 9388.0059094152],
    [0.00000000448, 5.09815034585, 4274.5183108324],
    [0.00000000532, 0.22623731981, 283.8593188652],
    [0.00000000527, 6.24827316267, 24602.61243487099],
    [0.00000000502, 0.97407194728, 12489.8856287072],
    [0.00000000603, 0.85487083482, 322711.30452390644],
    [0.00000000493, 6.1192029035, 29296.6153895786],
    [0.0000000053, 0.4349120389, 18845.7044316252],
    [0.00000000431, 5.3114594756, 7018.9523635232],
    [0.00000000559, 1.71609589414, 1581.959348283],
    [0.00000000584, 0.07135689258, 72850.56171524568],
    [0.00000000478, 1.85248622079, 14.2270940016],
    [0.00000000569, 2.95236791425, 97238.62754448749],
    [0.00000000405, 5.39493918596, 10873.9860304804],
    [0.00000000401, 4.50443000854, 17267.26820169119],
    [0.00000000389, 3.43047350256, 6244.9428143536],
    [0.00000000389, 3.21806007009, 6321.2088856292],
    [0.00000000388, 1.13963224225, 6297.302943993],
    [0.00000000388, 5.5089013304, 6268.8487559898],
    [0.00000000515, 1.67075193318, 12320.3200537534],
    [0.00000000393, 4.37184659923, 14919.0178537546],
    [0.00000000394, 6.10411050787, 4157.1984426122],
    [0.00000000491, 5.96740803508, 1478.8665740644],
    [0.00000000505, 4.66096327599, 17157.0618804718],
    [0.00000000528, 5.62841514056, 135.0650800354],
    [0.00000000439, 4.82558161657, 233141.3144043615],
    [0.00000000417, 3.74443512826, 13760.5987102074],
    [0.00000000419, 5.08318905121, 15671.0817594066],
    [0.00000000393, 1.56711153414, 7872.1487452752],
    [0.00000000392, 1.30305906278, 419.4846438752],
    [0.00000000365, 2.11020607854, 6922.9731363054],
    [0.00000000419, 0.62417554081, 5642.1982426092],
    [0.00000000387, 0.68719040069, 17253.04110768959],
    [0.00000000371, 5.76233828697, 13625.533630172],
    [0.00000000379, 0.81831291068, 3185.1920272656],
    [0.00000000499, 2.7256335059, 161710.6187862324],
    [0.00000000414, 3.32204347851, 22779.4372461938],
    [0.00000000485, 1.35444198321, 12528.018664345],
    [0.00000000358, 3.15737999738, 6271.3464971554],
    [0.00000000358, 3.49115357527, 6294.8052028274],
    [0.00000000351, 2.21887707287, 11616.976091013],
    [0.00000000387, 0.49044025161, 956.2891559706],
    [0.00000000451, 0.9183667758, 29864.334027309],
    [0.00000000421, 4.82745120825, 7445.5505543992],
    [0.00000000327, 3.9523222391, 20995.3929664494],
    [0.00000000336, 1.4133066775, 6279.1436967283],
    [0.00000000336, 5.23522689515, 6287.0080032545],
    [0.00000000358, 0.81490874525, 21393.5419698576],
    [0.0000000045, 0.23149923655, 1385.5615749511],
    [0.0000000032, 0.03172757569, 16858.4825329332],
    [0.00000000348, 4.27565702309, 3.9321532631],
    [0.00000000363, 4.29069778349, 7335.3442331798],
    [0.0000000033, 3.68113867113, 38.0276726358],
    [0.00000000395, 5.39428043096, 5905.7022420756],
    [0.00000000414, 4.1940257589, 44809.6502008634],
    [0.000000003, 3.87083875051, 640.8776073822],
    [0.00000000304, 0.15986036979, 5749.8617665478],
    [0.00000000351, 5.93395455459, 12345.739057544],
    [0.00000000307, 5.30261033229, 5120.6011455836],
    [0.00000000304, 4.93657040735, 29826.3063546732],
    [0.00000000297, 6.0166488958, 20597.2439630412],
    [0.00000000395, 0.07726910331, 4176.041342449],
    [0.0000000032, 2.49799253183, 10818.1352869158],
    [0.00000000365, 1.25425297875, 6660.4494579072],
    [0.00000000339, 6.10828911901, 6923.9534573736],
    [0.00000000274, 1.11162071728, 26709.6469424134],
    [0.00000000386, 2.29044623019, 2636.725472637],
    [0.00000000367, 1.18722914434, 30666.1549584328],
    [0.00000000268, 4.9583513753, 10454.5013866052],
    [0.00000000265, 5.11010291991, 19378.9185150688],
    [0.00000000325, 2.49277998223, 12359.9661515456],
    [0.00000000326, 4.24702233173, 16522.6597160022],
    [0.00000000269, 0.20537129126, 6816.289933435],
    [0.00000000298, 5.15059518785, 10344.2950653858],
    [0.00000000344, 3.51559745333, 6147.4505249814],
    [0.00000000255, 4.94642831875, 1375.7737998458],
    [0.00000000283, 2.57877323959, 316.3918696566],
    [0.00000000334, 3.13303102229, 6418.7011750014],
    [0.00000000316, 5.5420536673, 6055.5997172024],
    [0.00000000316, 0.36194124996, 21954.15760939799],
    [0.00000000243, 4.10172883526, 6310.4774060882],
    [0.00000000243, 2.54680473739, 6255.6742938946],
    [0.00000000314, 4.99359717889, 17996.0311682222],
    [0.00000000296, 0.07899534657, 6129.2970395066],
    [0.00000000301, 1.10648000281, 6510.5519827804],
    [0.00000000329, 1.15676558971, 377.3736079158],
    [0.00000000267, 3.42007125342, 24705.70520908959],
    [0.00000000285, 2.50494681053, 5469.5255660316],
    [0.00000000311, 3.23911937497, 11720.0688652316],
    [0.00000000286, 0.28647339668, 6436.8546604762],
    [0.00000000273, 4.29648399498, 28286.9904848612],
    [0.00000000319, 4.71062528834, 169379.25621117488],
    [0.00000000229, 1.01384122818, 1265.5674786264],
    [0.00000000234, 3.36893910039, 4487.8174062704],
    [0.00000000252, 0.5130141103, 4377.611085051],
    [0.00000000214, 2.09487711967, 2221.856634597],
    [0.00000000213, 3.79431896643, 30355.9973197678],
    [0.00000000263, 6.11317571912, 9380.9596727172],
    [0.00000000239, 1.33165763648, 10440.2742926036],
    [0.00000000289, 0.55454156939, 6206.8097787158],
    [0.00000000259, 3.43127382595, 6282.83203250789],
    [0.00000000259, 3.2172597467, 6283.3196674749],
    [0.00000000243, 4.14346390349, 7096.6261339512],
    [0.00000000246, 5.83734028861, 8671.9698704406],
    [0.00000000199, 0.93488663037, 11216.284290324],
    [0.00000000265, 5.61985831637, 48739.859897083],
    [0.00000000207, 3.06628694399, 12562.561271331],
    [0.00000000212, 1.7547160672, 7129.1586847426],
    [0.00000000269, 1.52668826951, 70755.06709173629],
    [0.00000000225, 4.01656879083, 5636.0650166766],
    [0.00000000192, 2.04748658291, 17271.8840075264],
    [0.0000000024, 5.09605084016, 15906.7641266826],
    [0.00000000187, 0.15192842664, 11609.8625440122],
    [0.00000000256, 2.30143585875, 224.3447957019],
    [0.0000000025, 4.24183292428, 5934.1514295434],
    [0.0000000022, 0.73345029623, 11087.2851259184],
    [0.00000000175, 5.41174539523, 11614.4332937322],
    [0.00000000175, 4.582125793, 3744.8273457378],
    [0.00000000241, 0.2878832148, 8390.1103575338],
    [0.00000000234, 2.61192358068, 34596.3646546524],
    [0.00000000174, 2.8520790096, 263.0839233728],
    [0.00000000233, 2.02657287745, 1.4844727083],
    [0.0000000019, 6.26917436708, 394.6258850592],
    [0.00000000187, 5.5882538287, 401.6721217572],
    [0.00000000178, 3.72578587318, 12132.439962106],
    [0.0000000023, 2.40692341132, 6632.0002704394],
    [0.00000000177, 4.73089168144, 4797.0957289262],
    [0.00000000167, 3.97388034335, 5714.253975964],
    [0.0000000016, 2.37187295106, 742.9900605326],
    [0.00000000214, 4.34116392416, 24492.40611365159],
    [0.00000000217, 4.52620284574, 3097.88382272579],
    [0.00000000172, 5.38973312367, 6332.8328754632],
    [0.00000000172, 1.25880044898, 6233.3188245196],
    [0.00000000221, 4.98998061605, 266.6070417218],
    [0.00000000159, 3.90246086071, 13198.935439296],
    [0.00000000207, 3.49598218672, 12569.7421286346],
    [0.00000000176, 4.05199455874, 12012.5822971404],
    [0.00000000157, 5.43302098132, 16840.67001081519],
    [0.0000000017, 0.63813817825, 6272.0301497275],
    [0.0000000017, 6.0103953944, 6294.1215502553],
    [0.00000000213, 4.21609963122, 19804.8272915828],
    [0.00000000167, 5.54070880349, 17686.7528455664],
    [0.00000000187, 5.70099962642, 20452.8694122218],
    [0.00000000147, 4.99188388936, 16737.5772365966],
    [0.00000000148, 2.67465318849, 6851.8977240188],
    [0.00000000146, 0.23801153618, 17370.3609759098],
    [0.00000000143, 0.85202449839, 5618.3198048614],
    [0.00000000193, 3.57442994352, 33326.5787331742],
    [0.0000000014, 1.22261707467, 2008.557539159],
    [0.00000000155, 0.27598891874, 20199.094959633],
    [0.00000000182, 5.69212378196, 28766.924424484],
    [0.00000000184, 3.48483358167, 5540.0857894588],
    [0.00000000162, 4.78754155685, 12551.9246059812],
    [0.00000000143, 2.32151913243, 5010.3948243642],
    [0.0000000019, 0.66924538276, 23581.2581773176],
    [0.00000000135, 5.34929799142, 735.8765135318],
    [0.00000000135, 0.07815962516, 12431.0866199474],
    [0.00000000134, 3.03203004875, 11925.2740926006],
    [0.00000000179, 1.07503153366, 16460.33352952499],
    [0.00000000182, 3.66470209346, 28.4491874678],
    [0.00000000146, 1.55848605346, 12701.2167800182],
    [0.00000000137, 2.60133025404, 11.0457002639],
    [0.00000000167, 1.26986508714, 17473.4537501284],
    [0.0000000017, 0.76594212114, 52670.0695933026],
    [0.00000000124, 5.79650915048, 6947.8318951214],
    [0.00000000135, 3.38698681678, 3531.5282502998],
    [0.00000000172, 4.94248686856, 167959.3901140583],
    [0.00000000122, 5.69264255527, 3583.3410306738],
    [0.0000000017, 1.45223415923, 333857.59012677264],
    [0.00000000155, 4.05744056379, 6058.7310542895],
    [0.0000000012, 1.1914090758, 12808.8803039568],
    [0.00000000141, 5.52534979149, 162420.55183479068],
    [0.00000000124, 1.37398060221, 8982.810669309],
    [0.0000000012, 5.84076902832, 12528.124027347],
    [0.00000000119, 1.19695856457, 19247.3765533824],
    [0.00000000143, 2.13563488838, 95.9792272178],
    [0.00000000117, 0.73795877914, 11610.5519583742],
    [0.00000000154, 4.06475922223, 38526.574350872],
    [0.00000000163, 3.11560982847, 661.232926781],
    [0.00000000163, 4.35848910377, 9929.4262273458],
    [0.00000000115, 2.14676232906, 19402.7969528166],
    [0.00000000119, 4.28708216617, 12249.7598303262],
    [0.00000000145, 2.74250030398, 6360.7496204194],
    [0.00000000145, 3.90603326867, 6205.4020795634],
    [0.00000000159, 4.18513291774, 228278.1046514866],
    [0.00000000156, 2.57788957454, 4307.5833041354],
    [0.00000000116, 0.601461417, 24065.80792277559],
    [0.00000000118, 1.23925579836, 6302.74561089119],
    [0.00000000118, 5.40927777429, 6263.4060890916],
    [0.0000000011, 2.33480621176, 16062.1845261168],
    [0.00000000137, 4.10438279102, 6250.5432992],
    [0.00000000137, 2.54415078163, 6315.6084007828],
    [0.00000000111, 2.27442358208, 6339.974224927],
    [0.00000000111, 4.37410999057, 6226.1774750558],
    [0.0000000015, 0.96205875343, 19800.9459562248],
    [0.00000000123, 2.37616666242, 24734.1543965574],
    [0.00000000107, 2.16622176546, 12463.0589257642],
    [0.00000000123, 1.00594418221, 6305.8510514422],
    [0.00000000123, 5.64258939044, 6260.3006485406],
    [0.00000000106, 1.67655703852, 11190.377900137],
    [0.00000000113, 1.95413568499, 2111.6503133776],
    [0.00000000131, 3.61185299316, 18415.51581209739],
    [0.0000000011, 4.8866712738, 6276.44729109139],
    [0.0000000011, 1.76186229885, 6289.70440889141],
    [0.00000000103, 2.75809551865, 6324.6266409762],
    [0.00000000103, 3.890438054, 6241.5250590066],
    [0.00000000103, 5.76083420502, 23937.856389741],
    [0.00000000107, 1.72027333824, 83973.83535572988],
    [0.00000000107, 2.75882604296, 84019.8592804939],
    [0.00000000113, 2.65508166498, 24336.0053931492],
    [0.00000000106, 3.27680652019, 12772.33724842],
    [0.00000000143, 1.51199781479, 2069.0068349066],
    [0.00000000143, 0.91985752497, 18772.9614786986],
    [0.00000000115, 3.78220330855, 3641.7345715192],
    [0.00000000126, 1.19294266238, 18822.9292301744],
    [0.00000000115, 4.66544469064, 12570.0838532459],
    [0.00000000098, 5.07674655291, 16310.9790457206],
    [0.00000000138, 4.55918305844, 6209.7787241324],
    [0.00000000138, 2.08935051421, 6356.3729758504],
    [0.0000000012, 4.95740945799, 9814.6041002912],
    [0.00000000135, 0.57059381593, 18699.6643528396],
    [0.00000000104, 2.15061044327, 12560.6287756754],
    [0.00000000098, 5.57514710248, 5815.11085963699],
    [0.00000000106, 1.77919890262, 23539.7073863328],
    [0.00000000114, 3.75372093481, 6155.057006654],
    [0.00000000114, 2.89481263784, 6411.0946933288],
    [0.00000000097, 6.03825791149, 27043.5028831828],
    [0.00000000095, 5.63307798614, 11300.5842213564],
    [0.0000000011, 2.79120257993, 6312.5053585274],
    [0.0000000011, 3.85733099272, 6253.6463414554],
    [0.00000000091, 2.99457476326, 12829.2356233556],
    [0.00000000128, 5.41337210078, 1293.4842235826],
    [0.00000000096, 5.97584747761, 2699.7348193176],
    [0.00000000119, 5.98882616741, 17892.93839400359],
    [0.00000000126, 0.25750574604, 311565.0189210402],
    [0.0000000012, 2.08798412726, 14158.7477136156],
    [0.000000001, 4.30344030661, 16627.3709153772],
    [0.00000000099, 3.61958161583, 6432.639047126],
    [0.00000000095, 4.18452410969, 78263.70942472259],
    [0.00000000124, 0.48010020247, 178430.0471905317],
    [0.00000000089, 1.07338604948, 6751.0408403458],
    [0.00000000096, 2.64494034094, 7349.5713271814],
    [0.00000000117, 5.44811650549, 42456.7840470916],
    [0.00000000103, 4.37748903957, 18202.21671665939],
    [0.00000000099, 0.58169736416, 6313.9899756264],
    [0.00000000099, 6.06683620849, 6252.1617243564],
    [0.0000000009, 0.38965081024, 58864.5439181463],
    [0.00000000097, 0.27231106216, 10557.5941608238],
    [0.00000000101, 3.42372783781, 19004.6479494084],
    [0.00000000098, 3.23381285207, 6126.675129489],
    [0.00000000098, 3.41472072058, 6439.4765704938],
    [0.00000000086, 1.34149823513, 23123.74586080659],
    [0.00000000118, 3.73846259947, 13951.7132749339],
    [0.00000000084, 3.13824782, 8858.3149443206],
    [0.00000000117, 4.10879972365, 89569.990119545],
    [0.00000000101, 0.2300906889, 18429.742906099],
    [0.00000000088, 3.76745959676, 17053.96910625319],
    [0.00000000113, 2.05049922518, 12985.636343858],
    [0.00000000082, 0.19375634761, 5483.254724826],
    [0.00000000084, 4.23745405632, 6379.0550772092],
    [0.00000000084, 2.41107951633, 6187.0966227736],
    [0.00000000097, 4.02159784443, 10239.5838660108],
    [0.00000000105, 2.77478785571, 6434.9731310766],
    [0.00000000105, 3.87374571694, 6131.1785689062],
    [0.00000000114, 4.07080498725, 8258.5683958474],
    [0.00000000082, 3.82704107824, 3958.1264411758],
    [0.00000000093, 1.35189028328, 18216.443810661],
    [0.00000000102, 2.89783593458, 5767.6119788984],
    [0.00000000102, 3.75069763806, 6798.5397210844],
    [0.0000000011, 2.19234510205, 56600.2792895222],
    [0.00000000112, 5.48905138227, 12188.778092067],
    [0.0000000008, 3.59070813227, 24080.03501677719],
    [0.00000000088, 3.00398297222, 1573.8204240988],
    [0.00000000092, 4.36461689094, 101426.20877096949],
    [0.00000000087, 2.32187773582, 1580.8666607968],
    [0.0000000011, 0.37009059115, 78423.70451667879],
    [0.00000000099, 2.40898854628, 33794.5437235286],
    [0.0000000008, 3.27906531246, 6485.3292451655],
    [0.0000000008, 3.36946826019, 6080.8224548173],
    [0.00000000089, 5.20240793768, 17363.24742890899],
    [0.00000000079, 4.53817935583, 36109.38220466459],
    [0.00000000088, 0.8707053518, 16943.7627850338],
    [0.00000000088, 3.2490126448, 12537.702512515],
    [0.00000000087, 1.75120977431, 28237.2334593894],
    [0.0000000008, 3.62211320521, 3956.5080160194],
    [0.00000000083, 0.01677699839, 21424.4666443034],
    [0.00000000099, 4.35778148149, 5017.508371365],
    [0.00000000079, 4.50777133706, 5621.8429232104],
    [0.00000000096, 1.98497858569, 5888.4499649322],
    [0.00000000096, 4.66355498696, 6677.7017350506],
    [0.00000000074, 5.98124271909, 6304.4114904584],
    [0.00000000074, 0.66729085356, 6261.7402095244],
    [0.00000000073, 2.6212933964, 6695.4469468658],
    [0.00000000073, 4.02724017625, 5870.704753117],
    [0.00000000085, 3.65241534932, 12850.011018848],
    [0.00000000076, 1.33659857866, 40796.33892267419],
    [0.00000000097, 0.92251430623, 24383.0791084414],
    [0.00000000072, 0.32356695638, 6312.8972881402],
    [0.00000000072, 0.04178130909, 6253.25441184259],
    [0.00000000095, 0.62289841825, 11080.1715789176],
    [0.000000001, 5.37794668456, 5316.1049725558],
    [0.00000000085, 2.90983978106, 12282.2923811176],
    [0.00000000071, 6.13573135109, 41194.4879260824],
    [0.00000000072, 4.76869158882, 15141.390794312],
    [0.00000000075, 1.96590126974, 24422.3703514073],
    [0.00000000073, 1.29002951973, 45892.73043315699],
    [0.00000000076, 1.98229485596, 63658.8777508376],
    [0.00000000087, 3.63418769958, 18106.2374894416],
    [0.0000000007, 2.01720588184, 6442.0193677746],
    [0.0000000007, 4.63132769081, 6124.1323322082],
    [0.00000000097, 4.76857001908, 92747.68916682259],
    [0.00000000078, 4.94336223185, 23550.34405168259],
    [0.00000000076, 3.43423122344, 5237.9210138038],
    [0.00000000078, 4.98905027033, 9924.8104215106],
    [0.00000000082, 5.48703292615, 6774.7391424502],
    [0.00000000067, 0.17045052997, 7082.8969751568],
    [0.00000000067, 4.81312573338, 6171.8892077038],
    [0.00000000067, 1.83540783927, 6394.262492279],
    [0.0000000008, 5.36760004078, 22380.755800274],
    [0.0000000007, 2.04678665255, 6175.4123260528],
    [0.0000000007, 4.6017469201, 6390.73937393],
    [0.00000000091, 2.47526506655, 6652.7756659318],
    [0.00000000091, 4.1732685061, 5913.376034051],
    [0.00000000067, 0.13241010748, 6300.8883721094],
    [0.00000000067, 0.23293815799, 6265.2633278734],
    [0.00000000067, 1.43864813435, 5959.570433334],
    [0.0000000008, 0.77942675353, 23646.32327890039],
    [0.00000000068, 3.64312434743, 4897.1805736552],
    [0.00000000069, 2.14076204045, 6944.3087767724],
    [0.00000000089, 1.97945887866, 10660.6869350424],
    [0.00000000073, 4.53414425046, 6195.76764545159],
    [0.00000000073, 2.11438932219, 6370.3840545312],
    [0.00000000066, 4.95039391556, 323.5054166574],
    [0.00000000066, 3.95274142218, 6251.1035441746],
    [0.00000000066, 2.69579215047, 6315.0481558082],
    [0.00000000063, 4.27995423229, 11823.1616394502],
    [0.00000000064, 0.09094709813, 28774.0379714848],
    [0.00000000086, 4.32355291567, 12341.8069042809],
    [0.00000000081, 0.47769423835, 31441.6775697568],
    [0.00000000071, 5.70281660725, 16207.886271502],
    [0.00000000061, 0.43078256287, 35050.00027447539],
    [0.00000000066, 2.78136130877, 17576.546524347],
    [0.00000000072, 0.54355547965, 18100.00325845],
    [0.00000000072, 1.59783293112, 245707.4661043443],
    [0.00000000064, 1.93356156446, 23006.42599258639],
    [0.00000000068, 2.90815872826, 28759.81087748319],
    [0.00000000062, 0.67966053291, 3855.0336669572],
    [0.00000000073, 6.18334008725, 23440.1377304632],
    [0.0000000006, 3.22950754418, 13088.7291180766],
    [0.00000000078, 4.56094059497, 12564.6672272745],
    [0.0000000006, 4.47214922427, 7548.6433286178],
    [0.00000000075, 4.42126467141, 18624.8827542723],
    [0.00000000069, 5.82409328726, 167993.69463622378],
    [0.00000000059, 0.42392189557, 41990.7859328988],
    [0.00000000081, 1.27058672695, 7250.046727427],
    [0.00000000059, 3.96273011871, 6289.1417656212],
    [0.00000000059, 2.68580345394, 6277.0099343616],
    [0.00000000063, 4.91003104939, 5436.9930152402],
    [0.00000000059, 2.73782977803, 8584.6616659008],
    [0.00000000074, 2.2955600889, 28313.288804661],
    [0.00000000057, 0.01221429824, 10027.9031957292],
    [0.00000000057, 4.8729936965, 792.7748884674],
    [0.0000000006, 2.20527423485, 647.0108333148],
    [0.00000000056, 4.47895058873, 15265.8865193004],
    [0.00000000072, 4.16398251563, 4598.0237274898],
    [0.00000000063, 1.27506758028, 5.5229243074],
    [0.00000000068, 2.71579728238, 3166.4164377316],
    [0.00000000074, 3.23404191447, 82534.40362061159],
    [0.00000000056, 1.96997381249, 6339.8791121612],
    [0.00000000056, 4.67855976016, 6226.2725878216],
    [0.00000000069, 1.89738325082, 23536.11695768099],
    [0.00000000056, 2.52728721608, 12303.06777661],
    [0.00000000055, 3.89144240866, 22345.2603761082],
    [0.00000000057, 3.55801157684, 6702.000248892],
    [0.00000000057, 3.09052199581, 5864.1514510908],
    [0.00000000064, 5.42433316705, 14169.7935622304],
    [0.00000000075, 5.93374782872, 32217.2001810808],
    [0.00000000059, 2.17826568386, 18003.144715223],
    [0.00000000059, 3.38504946794, 67589.08744705719],
    [0.00000000076, 2.34884503279, 23226.8386350252],
    [0.00000000073, 6.00950734574, 30348.883772767],
    [0.0000000007, 1.56579326622, 12299.544658261],
    [0.0000000006, 0.37221954582, 12171.5258149236],
    [0.00000000058, 3.15618940951, 6716.7875878682],
    [0.00000000074, 5.91246929008, 3684.3780499902],
    [0.00000000067, 2.65177830926, 22743.4093795164],
    [0.00000000062, 2.47017142882, 16193.65917750039],
    [0.00000000059, 2.60023110979, 15.252471185],
    [0.00000000059, 1.05069387628, 12164.4795782256],
    [0.00000000056, 4.0245774552, 3178.1457905676],
    [0.00000000063, 3.66056370325, 5219.7617665391],
    [0.00000000063, 0.58993036842, 5227.6260730653],
    [0.00000000071, 3.61897462493, 60530.4889857418],
    [0.00000000072, 1.05408545034, 4583.7966334882],
    [0.00000000052, 5.67741459488, 3627.5074775176],
    [0.00000000052, 1.7749513803, 6155.1243169568],
    [0.00000000052, 4.87358219235, 6411.027383026],
    [0.00000000073, 4.405435881, 80181.53746683979],
    [0.00000000058, 4.2930851208, 30775.481963643],
    [0.00000000068, 1.86654756299, 35371.8872659764],
    [0.00000000062, 4.46845874247, 6908.7460423038],
    [0.00000000062, 2.18007483018, 5657.405657679],
    [0.0000000005, 1.538981208, 2575.2390943292],
    [0.00000000052, 1.8284243193, 5244.049239201],
    [0.0000000005, 4.69455799921, 5881.4037282342],
    [0.0000000005, 1.95397557344, 6684.7479717486],
    [0.00000000053, 5.33677558065, 12146.6670561076],
    [0.00000000068, 6.19033473088, 96677.8988630422],
    [0.00000000064, 5.16841754323, 24279.10701821359],
    [0.0000000005, 3.21675900656, 43738.8023459658],
    [0.0000000005, 1.95435790721, 23141.5583829246],
    [0.00000000059, 4.28456134455, 3981.490034082],
    [0.00000000058, 2.65359377943, 40077.61957352],
    [0.00000000054, 3.56564135998, 15664.03552270859],
    [0.00000000061, 2.88962487651, 40398.189919266],
    [0.00000000051, 3.00540767523, 7668.9711263276],
    [0.00000000048, 4.80656273565, 3646.3503773544],
    [0.00000000048, 2.80573655186, 170.6728706192],
    [0.00000000065, 6.08902325889, 47162.5163546352],
    [0.00000000056, 4.19093499866, 799.8211251654],
    [0.00000000049, 3.72443814803, 96562.99901809469],
    [0.0000000005, 5.17709552474, 17583.6600713478],
    [0.00000000049, 5.165667313, 5490.300961524],
    [0.00000000058, 5.40778008235, 6076.3751126948],
    [0.00000000058, 1.2407534903, 6489.776587288],
    [0.00000000059, 1.72439508836, 44034.1275895394],
    [0.00000000045, 1.62661962717, 4480.7038592696],
    [0.00000000061, 5.10264428859, 491.6632924588],
    [0.00000000044, 1.10033696885, 2301.58581590939],
    [0.00000000054, 3.85123315789, 6559.8216218558],
    [0.00000000054, 2.79730041476, 6006.330078127],
    [0.00000000052, 5.42245980619, 244287.60000722768],
    [0.00000000048, 1.42585982742, 36147.4098773004],
    [0.00000000044, 0.8138981043, 5113.4875985828],
    [0.00000000045, 4.229540779, 533.2140834436],
    [0.00000000046, 2.27703250571, 4384.7246320518],
    [0.00000000048, 6.20173890368, 35579.69123957],
    [0.00000000051, 0.20646603354, 18326.65013188039],
    [0.00000000043, 3.1893950364, 27832.0382192832],
    [0.00000000046, 4.72419541485, 16703.062133499],
    [0.00000000052, 4.17179726389, 11919.140866668],
    [0.00000000052, 0.71926561105, 46386.9937433112],
    [0.00000000047, 0.82248881139, 5209.4668258006],
    [0.00000000046, 4.04752097938, 12555.1059997189],
    [0.00000000052, 0.43326734132, 6574.0487158574],
    [0.00000000052, 6.21526623133, 5992.1029841254],
    [0.00000000044, 5.37918791865, 69941.95360082899],
    [0.00000000058, 0.36325356715, 74673.9842281724],
    [0.00000000056, 1.50089021543, 27707.5424942948],
    [0.00000000045, 6.22182195617, 46360.6954235114],
    [0.00000000043, 3.11608101277, 8401.8397103698],
    [0.00000000047, 2.39687793686, 143571.32428481648],
    [0.00000000043, 1.13301289185, 30639.856638633],
    [0.00000000049, 1.97844011728, 22030.2129546696],
    [0.00000000045, 4.79114307475, 71519.2971432768],
    [0.00000000051, 4.52703512787, 7761.9424240558],
    [0.00000000041, 0.43156447693, 3735.238311759],
    [0.00000000041, 1.66415755313, 44136.951349374],
    [0.00000000047, 4.45924253669, 4708.2300487092],
    [0.00000000056, 0.65498687965, 28663.8316502654],
    [0.00000000055, 3.26682599355, 39302.096962196],
    [0.00000000049, 5.40929899528, 27511.4678735372],
    [0.00000000047, 0.89791015009, 316428.22867391503],
    [0.0000000004, 0.05000438602, 18208.349942592],
    [0.00000000056, 2.85120720656, 83659.27687239899],
    [0.00000000053, 3.02524199997, 38650.173506199],
    [0.00000000048, 2.50261741205, 12662.1309272006],
    [0.00000000052, 4.41165168727, 12571.6746242902],
    [0.00000000043, 4.69793306978, 7322.1024607818],
    [0.00000000041, 3.56541409677, 664.75604513],
    [0.00000000044, 5.20087497624, 6140.8972229552],
    [0.00000000044, 1.44765859641, 6425.2544770276],
    [0.00000000039, 0.38207420659, 22594.05489571199],
    [0.00000000039, 4.22033276864, 27278.4688164408],
    [0.00000000045, 4.12311427457, 44007.8292697396],
    [0.00000000054, 4.69164296803, 6006.04085625],
    [0.00000000054, 1.95689060462, 6560.1108437328],
    [0.00000000045, 5.54498349441, 142861.39123625818],
    [0.00000000047, 1.12159858858, 24499.5196606524],
    [0.00000000043, 1.36615498859, 7026.065910524],
    [0.0000000004, 0.90738693747, 26880.3198130326],
    [0.00000000047, 4.50830744099, 24485.29256665079],
    [0.00000000043, 5.81439105801, 6359.341921267],
    [0.00000000042, 4.70083045322, 6231.79551212899],
    [0.00000000042, 1.94770311943, 6334.35618785381],
    [0.00000000037, 5.3998280011, 23020.65308658799],
    [0.00000000052, 3.53311914292, 11904.9187732018],
    [0.0000000004, 1.50947925293, 7075.8507384588],
    [0.00000000049, 3.73016699917, 32243.4985008806],
    [0.00000000043, 4.45265815492, 40000.04091585779],
    [0.0000000004, 0.07156369559, 7122.0451377418],
    [0.0000000004, 0.29378456988, 5444.106562241],
    [0.00000000038, 2.24527247949, 44933.2493561904],
    [0.00000000037, 0.09116813653, 6850.7944877218],
    [0.00000000037, 0.27418012894, 5715.357212261],
    [0.00000000039, 2.88920508037, 20.3553193988],
    [0.00000000051, 5.82785362503, 84111.7471630594],
    [0.00000000037, 1.90653942815, 16723.350142595],
    [0.00000000042, 3.79031051907, 6328.217069628],
    [0.00000000042, 2.85822305358, 6237.9346303548],
    [0.00000000036, 2.35204592553, 20760.4270331914],
    [0.00000000049, 4.54040658078, 11293.4706743556],
    [0.0000000004, 3.64328287226, 3215.1363806432],
    [0.0000000005, 1.62788844152, 84334.4177638248],
    [0.0000000004, 0.78396796338, 71980.63357473118],
];

const X1: &[Term] = &[
    [0.00123403056, 0.0, 0.0],
    [0.00051500156, 6.00266267204, 12566.1516999828],
    [0.00001290726, 5.95943124583, 18849.2275499742],
    [0.00001068627, 2.01554176551, 6283.0758499914],
    [0.00000212689, 1.73380190491, 6279.5527316424],
    [0.00000212515, 4.91489371033, 6286.5989683404],
    [0.0000006226, 0.36239798178, 4705.7323075436],
    [0.00000059822, 3.81195369871, 6256.7775301916],
    [0.00000059514, 2.8363416015, 6309.3741697912],
    [0.00000048841, 5.21419389335, 775.522611324],
    [0.00000042883, 0.43789776559, 1059.3819301892],
    [0.00000046286, 0.01839494103, 7860.4193924392],
    [0.00000035675, 1.45279327264, 5884.9268465832],
    [0.00000036061, 2.16002201071, 5753.3848848968],
    [0.00000035367, 4.47243820095, 6812.766815086],
    [0.00000032137, 5.19589851893, 6681.2248533996],
    [0.00000028763, 5.91618989512, 25132.3033999656],
    [0.00000028447, 1.14976253807, 6127.6554505572],
    [0.00000027573, 5.50119104683, 6438.4962494256],
    [0.00000024815, 2.92204909812, 5486.777843175],
    [0.00000020611, 3.71790880968, 7079.3738568078],
    [0.00000019565, 2.89351924469, 5507.5532386674],
    [0.00000018308, 1.46954314992, 11790.6290886588],
    [0.00000016471, 6.22682639292, 11506.7697697936],
    [0.00000016757, 3.81935015812, 7058.5984613154],
    [0.00000014555, 5.97554823531, 6290.1893969922],
    [0.00000014388, 0.68157599309, 6275.9623029906],
    [0.00000013921, 1.44156172409, 796.2980068164],
    [0.00000011845, 4.15246503623, 4694.0029547076],
    [0.00000012573, 0.30429978572, 7.1135470008],
    [0.00000010073, 3.28940171828, 3738.761430108],
    [0.00000009513, 4.62657118532, 6069.7767545534],
    [0.00000010425, 4.26610810148, 6282.0955289232],
    [0.00000010425, 2.38242547117, 6284.0561710596],
    [0.00000009565, 1.89315044337, 4136.9104335162],
    [0.00000009044, 2.00977420682, 6496.3749454294],
    [0.00000008543, 0.0556387921, 1194.4470102246],
    [0.0000000823, 1.25204318279, 1589.0728952838],
    [0.00000006181, 3.36235656603, 8827.3902698748],
    [0.00000006252, 4.75560512125, 8429.2412664666],
    [0.00000005525, 5.36960259598, 4933.2084403326],
    [0.00000007312, 0.49039562572, 4535.0594369244],
    [0.00000007074, 4.39447155183, 5088.6288397668],
    [0.00000005168, 5.1570058649, 11769.8536931664],
    [0.00000004878, 0.63279675325, 6040.3472460174],
    [0.00000005339, 5.63168593753, 3154.6870848956],
    [0.00000004985, 4.62777616911, 12569.6748183318],
    [0.00000004902, 4.14599178687, 3930.2096962196],
    [0.00000004709, 3.96401482904, 5331.3574437408],
    [0.00000004601, 6.02376082863, 6525.8044539654],
    [0.00000004331, 1.32999081524, 7632.9432596502],
    [0.00000005607, 2.55800588736, 5729.506447149],
    [0.00000003968, 2.72696169781, 7234.794256242],
    [0.00000004394, 0.04709283876, 12559.038152982],
    [0.00000005262, 6.19471325132, 8031.0922630584],
    [0.000000051, 4.10862449537, 6836.6452528338],
    [0.00000005075, 2.30582917471, 7477.522860216],
    [0.00000003287, 5.41013501104, 10977.078804699],
    [0.00000003366, 0.28947921379, 11371.7046897582],
    [0.00000003341, 1.6498805663, 5223.6939198022],
    [0.00000003495, 3.7357104957, 4164.311989613],
    [0.00000004294, 4.93755825416, 1592.5960136328],
    [0.00000003408, 2.40593164878, 3128.3887650958],
    [0.00000002997, 4.86533819655, 1748.016413067],
    [0.0000000275, 5.24429623672, 7342.4577801806],
    [0.00000002669, 3.42836090012, 2146.1654164752],
    [0.00000003313, 1.92016526057, 801.8209311238],
    [0.00000002991, 2.26433580653, 8635.9420037632],
    [0.0000000339, 4.23836515895, 155.4203994342],
    [0.00000002384, 5.74836325186, 7084.8967811152],
    [0.00000002288, 4.5108894657, 17260.1546546904],
    [0.00000002405, 5.96195251565, 4690.4798363586],
    [0.00000002052, 1.42012676041, 951.7184062506],
    [0.00000002049, 3.53634954129, 1990.745017041],
    [0.00000002778, 1.4615134875, 5481.2549188676],
    [0.00000002656, 5.71405746008, 26.2983197998],
    [0.00000002135, 1.8902034547, 536.8045120954],
    [0.00000002529, 0.00975556739, 1349.8674096588],
    [0.00000001877, 2.82846563483, 553.5694028424],
    [0.00000001858, 0.74657310664, 398.1490034082],
    [0.00000002013, 2.40172210263, 522.5774180938],
    [0.00000001904, 4.23263119723, 9437.762934887],
    [0.00000001708, 0.29065876129, 10988.808157535],
    [0.00000001853, 1.84012190435, 5230.807466803],
    [0.00000001857, 2.34009177634, 5216.5803728014],
    [0.00000001558, 1.1002474406, 426.598190876],
    [0.00000001543, 5.14512865944, 10447.3878396044],
    [0.00000001555, 3.67004205114, 13095.8426650774],
    [0.00000001779, 1.80817581905, 12562.6285816338],
    [0.0000000145, 0.99962470222, 6262.7205305926],
    [0.0000000145, 5.64890887043, 6303.4311693902],
    [0.0000000188, 1.74872544631, 10973.55568635],
    [0.00000001372, 0.89279228106, 7875.6718636242],
    [0.00000001247, 1.86318425701, 2118.7638603784],
    [0.00000001231, 4.10277044176, 18319.5365848796],
    [0.00000001373, 4.83873686423, 12721.572099417],
    [0.0000000114, 3.49255962548, 1066.49547719],
    [0.00000001127, 6.04843564608, 5643.1785636774],
    [0.00000001136, 2.83389341769, 2942.4634232916],
    [0.00000001071, 3.7751142244, 242.728603974],
    [0.00000001165, 5.90779831262, 15720.8387848784],
    [0.00000000974, 0.24120093775, 639.897286314],
    [0.00000000973, 1.30526267473, 4292.3308329504],
    [0.00000000993, 3.20822379065, 10575.4066829418],
    [0.00000000964, 2.1352164939, 2388.8940204492],
    [0.00000000929, 1.06241249364, 16496.3613962024],
    [0.00000000939, 5.78268735385, 20426.571092422],
    [0.00000000889, 0.06581239696, 6288.5987742988],
    [0.00000000889, 0.29953586851, 6277.552925684],
    [0.00000001018, 4.23379398746, 12539.853380183],
    [0.00000001042, 2.30738424939, 529.6909650946],
    [0.00000001033, 1.04793549544, 5760.4984318976],
    [0.00000001017, 5.59172649862, 6805.6532680852],
    [0.00000000801, 5.36423767778, 14314.1681130498],
    [0.00000000795, 4.97031461103, 6279.7894925736],
    [0.00000000795, 1.67821896162, 6286.3622074092],
    [0.00000000723, 3.87714868475, 9623.6882766912],
    [0.000000008, 4.75445675725, 12029.3471878874],
    [0.00000000698, 0.23124375738, 6148.010769956],
    [0.00000000675, 5.56136235734, 12964.300703391],
    [0.00000000678, 0.13408273301, 6418.1409300268],
    [0.00000000671, 1.28940504615, 6709.6740408674],
    [0.00000000898, 2.2635297734, 13367.9726311066],
    [0.00000000716, 4.07157593048, 16730.4636895958],
    [0.00000000651, 5.31876664276, 5856.4776591154],
    [0.00000000744, 4.25820617142, 12043.574281889],
    [0.0000000065, 3.96082074858, 14712.317116458],
    [0.00000000643, 6.14575788122, 2352.8661537718],
    [0.00000000666, 6.18664331112, 5746.271337896],
    [0.00000000588, 3.24442116878, 13119.72110282519],
    [0.00000000627, 1.85323853183, 4686.8894077068],
    [0.00000000584, 1.78420561597, 13517.8701062334],
    [0.0000000061, 0.48716946879, 6819.8803620868],
    [0.00000000666, 3.29946942274, 3634.6210245184],
    [0.00000000585, 0.14860338726, 12036.4607348882],
    [0.0000000062, 5.87390167695, 31415.379249957],
    [0.00000000553, 2.36074148933, 6306.9542877392],
    [0.00000000553, 4.28779208332, 6259.1974122436],
    [0.00000000527, 4.65845256725, 10177.2576795336],
    [0.00000000523, 5.55991825992, 12139.5535091068],
    [0.00000000514, 2.30343678959, 4701.1165017084],
    [0.00000000495, 3.58067041581, 13362.4497067992],
    [0.00000000688, 0.4116031281, 13916.0191096416],
    [0.00000000481, 4.14197696514, 6286.9571853494],
    [0.00000000481, 2.50655660751, 6279.1945146334],
    [0.00000000465, 0.81901657744, 14143.4952424306],
    [0.0000000044, 2.91975126929, 3894.1818295422],
    [0.00000000431, 3.09968854047, 11499.6562227928],
    [0.00000000452, 5.55409870988, 12573.2652469836],
    [0.00000000499, 1.08746978287, 12410.7313005486],
    [0.0000000044, 2.14902528642, 24072.9214697764],
    [0.00000000435, 4.7694552879, 9917.6968745098],
    [0.00000000398, 5.77181168519, 8273.8208670324],
    [0.00000000379, 4.62464502982, 6386.16862421],
    [0.00000000379, 2.02388854283, 6179.9830757728],
    [0.00000000377, 5.90355422208, 7872.1487452752],
    [0.00000000419, 5.62219999256, 5327.4761083828],
    [0.00000000383, 0.40420536338, 6319.1037166688],
    [0.00000000383, 6.24432820927, 6247.04798331399],
    [0.00000000486, 3.05618432546, 12592.4500197826],
    [0.00000000457, 2.45652916518, 6489.2613984286],
    [0.00000000457, 4.19200440747, 6076.8903015542],
    [0.00000000512, 1.88365818219, 11015.1064773348],
    [0.00000000344, 0.28667648401, 18451.07854656599],
    [0.0000000034, 2.75068444234, 12323.4230960088],
    [0.00000000454, 0.72878821246, 2787.0430238574],
    [0.00000000364, 2.25070711701, 6321.1035226272],
    [0.00000000364, 4.39782645564, 6245.0481773556],
    [0.00000000342, 6.10019640486, 6303.8512454838],
    [0.00000000342, 0.54833716779, 6262.300454499],
    [0.00000000324, 2.66245548691, 77713.7714681205],
    [0.00000000316, 0.14807870151, 11926.2544136688],
    [0.00000000318, 1.32350341546, 6311.5250374592],
    [0.00000000318, 5.32503015719, 6254.6266625236],
    [0.00000000304, 2.00970548291, 12779.4507954208],
    [0.0000000036, 4.1011609151, 1052.2683831884],
    [0.00000000343, 2.93550529951, 6267.82337880639],
    [0.00000000343, 3.71302827314, 6298.3283211764],
    [0.00000000398, 0.12276624389, 1551.045222648],
    [0.000000003, 1.77610616438, 90279.92316810328],
    [0.00000000367, 2.75102591636, 10021.8372800994],
    [0.00000000297, 0.51546903036, 5429.8794682394],
    [0.00000000337, 2.71244267795, 17782.7320727842],
    [0.00000000295, 4.05850212848, 6702.5604938666],
    [0.00000000331, 0.94287498279, 7238.6755916],
    [0.00000000321, 2.23719619346, 17796.9591667858],
    [0.00000000378, 2.47077025009, 213.299095438],
    [0.00000000268, 4.36573038796, 2544.3144198834],
    [0.0000000029, 5.31163321847, 220.4126424388],
    [0.00000000349, 0.95962542267, 17789.845619785],
    [0.00000000275, 3.67150875811, 14945.3161735544],
    [0.00000000253, 2.22918080251, 18073.7049386502],
    [0.00000000257, 1.04749733742, 955.5997416086],
    [0.00000000234, 4.07399715957, 1596.1864422846],
    [0.00000000282, 4.5026049449, 13341.6743113068],
    [0.0000000028, 5.71871851487, 206.1855484372],
    [0.00000000269, 6.10957634874, 9779.1086761254],
    [0.00000000306, 3.20523259534, 5863.5912061162],
    [0.00000000216, 5.60561646872, 3185.1920272656],
    [0.0000000028, 1.91082976057, 5642.1982426092],
    [0.00000000233, 3.01339621844, 10984.1923516998],
    [0.00000000263, 2.16888500036, 12168.0026965746],
    [0.00000000226, 4.44534966925, 3496.032826134],
    [0.0000000026, 3.16564185469, 10969.9652576982],
    [0.00000000227, 4.95666866168, 5849.3641121146],
    [0.00000000211, 1.22111379347, 19651.048481098],
    [0.0000000025, 4.61595902292, 6923.9534573736],
    [0.00000000194, 2.37630770389, 640.8776073822],
    [0.00000000203, 4.3949682847, 6062.6632075526],
    [0.00000000203, 2.25356528795, 6503.4884924302],
    [0.00000000184, 0.13859812924, 18209.33026366019],
    [0.00000000184, 4.20955149479, 12566.2190102856],
    [0.0000000018, 5.76799248594, 853.196381752],
    [0.00000000199, 2.84103239065, 3.523118349],
    [0.00000000187, 4.59167688742, 6276.02961329339],
    [0.00000000187, 2.05685668523, 6290.1220866894],
    [0.00000000192, 2.99578290747, 4732.0306273434],
    [0.00000000184, 4.65365446464, 12566.08438968],
    [0.0000000023, 2.23774195109, 12567.132021051],
    [0.00000000165, 1.3430738091, 110.2063212194],
    [0.00000000166, 1.19477871058, 433.7117378768],
    [0.00000000184, 3.38049914956, 6037.244203762],
    [0.00000000156, 2.34457936544, 2648.454825473],
    [0.00000000175, 3.26771507312, 6528.9074962208],
    [0.00000000154, 5.67725689556, 6453.7487206106],
    [0.00000000154, 0.97127667708, 6112.4029793722],
    [0.00000000166, 4.51313560848, 12352.8526045448],
    [0.00000000146, 4.05664802756, 149.5631971346],
    [0.00000000172, 0.88734623011, 1577.3435424478],
    [0.00000000144, 3.76179690789, 18635.9284545362],
    [0.00000000146, 1.99164761433, 13760.5987102074],
    [0.00000000136, 0.75192359085, 11712.9553182308],
    [0.00000000142, 1.34533369944, 4157.1984426122],
    [0.00000000133, 0.01824912792, 18139.2945014159],
    [0.00000000124, 0.99880484927, 17256.6315363414],
    [0.0000000014, 1.25451695814, 9380.9596727172],
    [0.00000000123, 0.26259126301, 6172.869528772],
    [0.00000000123, 0.10275700246, 6393.2821712108],
    [0.00000000121, 5.40082218265, 20.7753954924],
    [0.00000000117, 4.47711713051, 18852.7506683232],
    [0.00000000114, 2.33765655466, 65147.6197681377],
    [0.0000000012, 2.2918427974, 17253.04110768959],
    [0.00000000132, 4.94196827917, 18875.525869774],
    [0.00000000123, 4.42839393502, 12565.1713789146],
    [0.00000000129, 2.56187150433, 11513.8833167944],
    [0.00000000121, 2.27781803851, 10419.9862835076],
    [0.00000000112, 0.58654969541, 632.7837393132],
    [0.00000000118, 5.96799701373, 17654.7805397496],
    [0.00000000105, 5.26799267002, 23013.5395395872],
    [0.00000000103, 0.24702432231, 6271.3464971554],
    [0.00000000103, 0.11832394316, 6294.8052028274],
    [0.00000000102, 2.69803619583, 17267.26820169119],
    [0.00000000108, 2.49639211639, 23543.23050468179],
    [0.00000000114, 2.21695343681, 4171.4255366138],
    [0.00000000101, 4.42100430236, 4804.209275927],
    [0.00000000111, 3.66256237589, 1581.959348283],
    [0.00000000119, 0.24456263546, 10213.285546211],
    [0.00000000102, 5.67042027327, 6549.6828917132],
    [0.00000000102, 0.97811329938, 6016.4688082696],
    [0.00000000121, 0.05336972054, 13625.533630172],
    [0.0000000009, 3.68828039857, 76.2660712756],
    [0.00000000086, 5.93949751968, 12808.8803039568],
    [0.00000000095, 1.34358559692, 12345.739057544],
    [0.00000000106, 5.14281705612, 11216.284290324],
    [0.00000000095, 2.50046439714, 12012.5822971404],
    [0.00000000081, 3.84772814821, 11614.4332937322],
    [0.00000000084, 1.14755262027, 6255.6742938946],
    [0.00000000084, 5.50098095238, 6310.4774060882],
    [0.00000000106, 6.00471264495, 3097.88382272579],
    [0.0000000008, 0.34711727404, 6922.9731363054],
    [0.00000000085, 5.79536877725, 5636.0650166766],
    [0.00000000092, 0.87789019103, 10818.1352869158],
    [0.0000000008, 4.19702650261, 3583.3410306738],
    [0.00000000083, 3.709020395, 5120.6011455836],
    [0.0000000008, 1.41939312484, 13521.7514415914],
    [0.00000000084, 3.01891268791, 10440.2742926036],
    [0.00000000077, 5.70306938809, 6993.0088985497],
    [0.00000000104, 5.42105253386, 5650.2921106782],
    [0.00000000086, 0.81273058913, 12359.9661515456],
    [0.0000000009, 6.02294397735, 6195.76764545159],
    [0.0000000009, 0.6255895953, 6370.3840545312],
    [0.00000000074, 2.33758314304, 3340.6124266998],
    [0.00000000082, 0.197679481, 18842.11400297339],
    [0.00000000083, 5.31994916859, 18415.51581209739],
    [0.00000000101, 2.8619181197, 3104.9300594238],
    [0.00000000073, 6.09594424715, 949.1756089698],
    [0.00000000084, 4.35521501162, 2379.1644735716],
    [0.00000000075, 1.62833922577, 30355.9973197678],
    [0.00000000069, 3.24662354142, 10454.5013866052],
    [0.00000000076, 3.9266593535, 17298.1823273262],
    [0.00000000076, 4.83482959872, 18429.742906099],
    [0.00000000079, 0.06205634713, 22805.7355659936],
    [0.00000000077, 2.05455640378, 16858.4825329332],
    [0.00000000087, 5.09755111164, 3903.9113764198],
    [0.00000000061, 3.70271756349, 16737.5772365966],
    [0.00000000078, 4.31638741861, 8671.9698704406],
    [0.00000000063, 0.99541849434, 24356.7807886416],
    [0.00000000075, 2.14136838637, 23581.2581773176],
    [0.00000000073, 4.49527510239, 9388.0059094152],
    [0.00000000058, 0.89406841198, 17996.0311682222],
    [0.00000000057, 2.489140841, 419.4846438752],
    [0.00000000062, 4.06342805588, 11925.2740926006],
    [0.0000000006, 3.51548088474, 34570.0663348526],
    [0.00000000057, 4.46050926275, 149854.4001348079],
    [0.00000000056, 5.33393809517, 12455.9453787634],
    [0.00000000056, 2.17965993818, 11764.330768859],
    [0.00000000061, 0.15194461973, 28237.2334593894],
    [0.00000000065, 5.87045161229, 7335.3442331798],
    [0.00000000072, 5.87296425674, 6510.5519827804],
    [0.00000000072, 0.77556931591, 6055.5997172024],
    [0.00000000071, 0.23083621209, 12545.3763044904],
    [0.00000000061, 5.37705181537, 6253.6463414554],
    [0.00000000061, 1.27148175728, 6312.5053585274],
    [0.00000000055, 1.1860370357, 2699.7348193176],
    [0.00000000056, 6.18401368339, 5573.1428014331],
    [0.00000000055, 5.94073604896, 15671.0817594066],
    [0.00000000052, 0.26563539971, 5326.7866940208],
    [0.00000000053, 1.77739578512, 26735.9452622132],
    [0.00000000065, 2.33938496802, 14919.0178537546],
    [0.00000000049, 4.18739781015, 35579.69123957],
    [0.00000000053, 5.28549359722, 6357.8574485587],
    [0.00000000053, 1.36303997543, 6208.2942514241],
    [0.00000000051, 0.76407742618, 16522.6597160022],
    [0.00000000049, 4.92674479666, 21393.5419698576],
    [0.00000000049, 0.60525485888, 7018.9523635232],
    [0.00000000049, 6.04327871377, 5547.1993364596],
    [0.00000000049, 2.59123701567, 12416.5885028482],
    [0.0000000005, 0.07523239468, 26084.0218062162],
    [0.00000000048, 5.46985443988, 12132.439962106],
    [0.00000000051, 3.40683294217, 23006.42599258639],
    [0.00000000058, 2.46543150418, 15141.390794312],
    [0.00000000048, 4.88190521609, 16200.7727245012],
    [0.00000000047, 0.97667389279, 24279.10701821359],
    [0.00000000049, 1.66846784739, 5749.8617665478],
    [0.00000000049, 4.98006572526, 6816.289933435],
    [0.00000000046, 3.45134537804, 19378.9185150688],
    [0.00000000047, 2.09300174029, 24065.80792277559],
    [0.00000000046, 5.73797450552, 104351.61256629678],
    [0.00000000049, 1.45701599108, 8982.810669309],
    [0.0000000005, 4.49441848554, 24602.61243487099],
    [0.00000000045, 0.12799634054, 24491.4257925834],
    [0.00000000049, 2.95918505969, 16460.33352952499],
    [0.00000000054, 0.03974674424, 7834.1210726394],
    [0.00000000045, 5.05860612319, 161000.6857376741],
    [0.00000000044, 3.92726741188, 8662.240323563],
    [0.00000000049, 4.51486356794, 29303.7289365794],
    [0.00000000049, 4.98978743446, 29289.5018425778],
    [0.00000000043, 3.34677142688, 5244.049239201],
    [0.00000000044, 3.63764737159, 6175.4123260528],
    [0.00000000044, 3.01088620106, 6390.73937393],
    [0.00000000042, 1.47305743112, 24705.70520908959],
    [0.00000000041, 4.78696656856, 17370.3609759098],
    [0.00000000041, 4.99610869214, 22483.84857449259],
    [0.00000000057, 3.1949709553, 84334.66158130829],
    [0.00000000041, 3.62603303245, 23020.65308658799],
    [0.00000000045, 2.13147646951, 54247.4131357504],
    [0.0000000004, 3.00393229632, 32243.4985008806],
    [0.0000000004, 0.45946989377, 24336.0053931492],
    [0.0000000004, 0.00254937606, 8401.8397103698],
    [0.00000000041, 5.05922003836, 26482.1708096244],
    [0.00000000044, 4.93011217974, 28230.18722269139],
    [0.00000000039, 5.54872052106, 45585.1728121874],
    [0.00000000038, 3.93561558747, 6268.8487559898],
    [0.00000000038, 2.71291798518, 6297.302943993],
    [0.00000000041, 4.95311845784, 15508.6151232744],
    [0.00000000038, 0.10976793876, 6171.8892077038],
    [0.00000000038, 0.25558032671, 6394.262492279],
    [0.00000000039, 3.31511780881, 29826.3063546732],
    [0.00000000038, 4.03952051907, 16062.1845261168],
    [0.00000000037, 2.07587316842, 20452.8694122218],
    [0.00000000049, 5.78169307611, 18216.443810661],
    [0.00000000041, 1.35496527372, 29088.811415985],
    [0.00000000038, 6.16268217428, 18202.21671665939],
    [0.00000000036, 3.8431980186, 39302.096962196],
    [0.00000000038, 6.14920442251, 26709.6469424134],
    [0.00000000036, 6.28049708584, 9924.8104215106],
    [0.00000000035, 4.66732134451, 4061.2192153944],
    [0.0000000004, 3.43223548088, 27511.4678735372],
    [0.00000000034, 1.38801022558, 6147.4505249814],
    [0.00000000034, 5.26052334707, 6418.7011750014],
    [0.00000000034, 1.97967478962, 17271.8840075264],
    [0.00000000037, 6.05744777692, 21150.8133658836],
    [0.00000000034, 1.90509484306, 29026.48522950779],
    [0.00000000035, 3.20661690466, 7322.1024607818],
    [0.00000000044, 2.79017179925, 3981.490034082],
    [0.00000000034, 1.21719184072, 21548.9623692918],
    [0.00000000033, 4.13127114332, 173566.83743765688],
    [0.00000000033, 3.22867201822, 30666.1549584328],
    [0.00000000034, 4.95128499531, 38500.2760310722],
    [0.00000000032, 4.38302389502, 17686.7528455664],
    [0.00000000038, 4.95582614524, 19004.6479494084],
    [0.00000000033, 1.70921741352, 34520.3093093808],
    [0.00000000041, 4.09101902227, 21202.093703746],
    [0.00000000031, 0.28544969417, 22003.9146348698],
    [0.00000000037, 1.21597687953, 7349.5713271814],
    [0.00000000031, 0.19462514993, 27832.0382192832],
    [0.00000000037, 3.41912843249, 29296.6153895786],
    [0.00000000035, 2.69261244483, 11919.140866668],
    [0.00000000035, 0.83074174405, 29062.5130961852],
    [0.0000000003, 2.96012497927, 12489.8856287072],
    [0.00000000035, 4.83736876925, 21228.3920235458],
    [0.00000000032, 6.26164802166, 6231.79551212899],
    [0.00000000032, 0.38688555099, 6334.35618785381],
    [0.00000000029, 0.70432070922, 49515.382508407],
    [0.00000000032, 0.44788919628, 31172.650645983],
    [0.00000000031, 2.69970301246, 33019.0211122046],
    [0.00000000029, 2.26256470092, 27278.4688164408],
    [0.00000000031, 3.19023486538, 5017.508371365],
    [0.00000000028, 1.87849143707, 24080.03501677719],
    [0.00000000034, 0.78574341965, 5905.7022420756],
    [0.00000000034, 5.862790153, 6660.4494579072],
    [0.00000000038, 5.12224209756, 31570.7996493912],
    [0.00000000027, 3.7602531546, 19402.7969528166],
    [0.00000000027, 0.53327304803, 233141.3144043615],
    [0.0000000003, 2.32405719366, 12586.9270954752],
    [0.00000000028, 5.54772804461, 34911.412076091],
    [0.00000000027, 5.30079330746, 43232.3066584156],
    [0.00000000027, 6.17189140209, 1692.1656695024],
    [0.00000000036, 4.81217077776, 15664.03552270859],
    [0.00000000027, 0.6563741813, 6360.7496204194],
    [0.00000000027, 5.99215939135, 6205.4020795634],
    [0.00000000026, 3.4241373744, 24383.0791084414],
    [0.00000000033, 3.45722382528, 28628.3362260996],
    [0.00000000027, 2.32049228976, 32367.0976562076],
    [0.00000000026, 1.98182489066, 19804.8272915828],
    [0.00000000027, 1.77114813957, 4487.8174062704],
    [0.00000000028, 2.89944615107, 58953.145443294],
    [0.00000000028, 3.80331477821, 10239.5838660108],
    [0.00000000026, 0.36912120822, 6339.974224927],
    [0.00000000026, 6.27941236443, 6226.1774750558],
    [0.00000000026, 6.01416870867, 4797.0957289262],
    [0.00000000028, 2.80825729869, 22476.73502749179],
    [0.00000000029, 0.17746825116, 6592.3541726472],
    [0.00000000029, 0.18788001431, 5973.7975273356],
    [0.00000000026, 3.93576097012, 36949.2308084242],
    [0.00000000027, 0.64682460545, 29424.634232916],
    [0.00000000026, 2.5405955204, 9910.583327509],
    [0.00000000028, 2.41855003101, 46386.9937433112],
    [0.00000000024, 1.22629501602, 21947.1113727],
    [0.00000000024, 0.55027097678, 11616.976091013],
    [0.00000000025, 2.78491065355, 6302.74561089119],
    [0.00000000025, 3.8636229191, 6263.4060890916],
    [0.00000000026, 4.44347824401, 15110.4661198662],
    [0.00000000027, 5.91935985488, 52175.8062831484],
    [0.00000000028, 6.10918595816, 18052.9295431578],
    [0.00000000023, 1.99242379288, 30774.5016425748],
    [0.00000000024, 3.73458431258, 31968.9486527994],
    [0.00000000023, 0.62347300029, 17892.93839400359],
    [0.00000000024, 3.21260068222, 23550.34405168259],
    [0.00000000023, 1.36063534536, 6716.7875878682],
    [0.00000000027, 0.02724821878, 25158.6017197654],
    [0.00000000026, 3.57645528088, 8584.6616659008],
    [0.00000000022, 3.99741791962, 7445.5505543992],
    [0.00000000022, 6.10694895695, 15265.8865193004],
    [0.00000000025, 0.81555419576, 14155.2245952666],
    [0.00000000023, 3.06283945185, 6272.0301497275],
    [0.00000000023, 3.5856941208, 6294.1215502553],
    [0.00000000025, 2.4488007694, 20199.094959633],
    [0.00000000021, 5.78253540504, 22779.4372461938],
    [0.00000000023, 2.25096306087, 34115.1140692746],
    [0.00000000022, 4.67990936559, 34596.3646546524],
    [0.00000000029, 0.93434607315, 11933.3679606696],
    [0.00000000021, 4.08577407328, 30220.9322397324],
    [0.0000000002, 0.47093224249, 47162.5163546352],
    [0.00000000022, 1.38262024424, 4379.6390374902],
    [0.0000000002, 5.31355969163, 40879.4405046438],
    [0.00000000022, 4.52226925108, 28759.81087748319],
    [0.00000000026, 3.41054638032, 18422.62935909819],
    [0.00000000027, 0.67002293804, 34513.2630726828],
    [0.00000000019, 4.7861006476, 28313.288804661],
    [0.0000000002, 5.09152714894, 8186.5126624926],
    [0.00000000025, 3.53211055104, 55798.4583583984],
    [0.00000000025, 0.38024667868, 9225.539273283],
    [0.0000000002, 1.71238700404, 27433.88921587499],
    [0.00000000024, 1.20856889899, 9411.4646150872],
    [0.0000000002, 1.65292451759, 6379.0550772092],
    [0.0000000002, 4.99560905506, 6187.0966227736],
    [0.0000000002, 2.94178503134, 19800.9459562248],
    [0.0000000002, 4.32349571107, 62883.3551395136],
    [0.00000000022, 4.44470422678, 18326.65013188039],
    [0.00000000019, 4.37840329985, 16207.886271502],
    [0.00000000022, 4.46505143635, 6332.8328754632],
    [0.00000000022, 2.1834821363, 6233.3188245196],
    [0.00000000019, 1.36569875427, 23539.7073863328],
    [0.00000000018, 4.61817062443, 6593.9166488598],
    [0.00000000018, 2.03036294822, 5972.235051123],
    [0.00000000019, 2.36455752682, 5618.3198048614],
    [0.00000000019, 4.28397604583, 6947.8318951214],
    [0.00000000019, 0.18461307728, 83973.83535572988],
    [0.00000000019, 4.29574440213, 84019.8592804939],
    [0.0000000002, 2.85390720284, 9070.1188738488],
];

const X2: &[Term] = &[
    [0.00004143217, PI, 0.0],
    [0.00002175695, 4.39999849572, 12566.1516999828],
    [0.00000995233, 0.20790847155, 6283.0758499914],
    [0.00000092659, 4.1928547101, 18849.2275499742],
    [0.00000013679, 3.37833642063, 6286.5989683404],
    [0.00000013668, 3.27271492019, 6279.5527316424],
    [0.0000000819, 4.4192802203, 6256.7775301916],
    [0.00000008145, 2.22925093408, 6309.3741697912],
    [0.00000008004, 5.92288197328, 6127.6554505572],
    [0.00000007746, 0.72469358509, 6438.4962494256],
    [0.00000008899, 5.38113427234, 83996.84731811189],
    [0.00000004754, 6.16710003373, 709.9330485583],
    [0.00000003737, 2.48724420764, 5507.5532386674],
    [0.00000002893, 4.9497269746, 4705.7323075436],
    [0.00000002937, 4.08160813245, 25132.3033999656],
    [0.00000003203, 4.14275083744, 7058.5984613154],
    [0.00000002254, 3.51957213521, 775.522611324],
    [0.0000000217, 1.70495739017, 7860.4193924392],
    [0.00000002031, 2.2936343897, 6275.9623029906],
    [0.00000002031, 4.35489918295, 6290.1893969922],
    [0.00000001904, 4.46668961834, 5486.777843175],
    [0.0000000172, 5.23142094282, 1059.3819301892],
    [0.00000001548, 2.12906745749, 6040.3472460174],
    [0.00000001563, 2.18101487697, 7079.3738568078],
    [0.00000001456, 3.53770823599, 5753.3848848968],
    [0.00000001424, 3.16250984559, 6812.766815086],
    [0.0000000147, 4.51659549398, 6525.8044539654],
    [0.00000001429, 3.01998118552, 5884.9268465832],
    [0.00000001288, 3.62892288697, 6681.2248533996],
    [0.00000001338, 1.04445705185, 5729.506447149],
    [0.00000001039, 5.85310113863, 6282.0955289232],
    [0.00000001039, 0.79543243402, 6284.0561710596],
    [0.00000001212, 5.61713170172, 6836.6452528338],
    [0.00000000904, 2.43535199673, 5331.3574437408],
    [0.00000000871, 3.84816000443, 4933.2084403326],
    [0.00000000879, 3.06133930098, 11790.6290886588],
    [0.00000001102, 4.59510736976, 167283.7615876655],
    [0.00000000769, 4.22812146942, 7234.794256242],
    [0.00000000744, 0.34956564055, 4136.9104335162],
    [0.00000000939, 3.62288542048, 11856.2186514245],
    [0.00000000675, 2.82587446878, 7632.9432596502],
    [0.00000000654, 1.40322441961, 11506.7697697936],
    [0.00000000854, 5.24328642976, 4535.0594369244],
    [0.00000000665, 4.81749499447, 1194.4470102246],
    [0.00000000834, 5.75118975782, 155.4203994342],
    [0.00000000785, 5.88776299473, 5088.6288397668],
    [0.00000000548, 6.12128965864, 796.2980068164],
    [0.00000000686, 1.90135823927, 801.8209311238],
    [0.00000000507, 5.42408029291, 4694.0029547076],
    [0.00000000677, 2.71965226391, 3128.3887650958],
    [0.00000000499, 3.0275223585, 12569.6748183318],
    [0.0000000048, 0.01327044252, 8429.2412664666],
    [0.00000000592, 1.39433962245, 8031.0922630584],
    [0.00000000498, 6.19000103499, 1589.0728952838],
    [0.00000000562, 0.77105088912, 7477.522860216],
    [0.00000000415, 0.0055896245, 6069.7767545534],
    [0.00000000415, 0.3513122628, 6496.3749454294],
    [0.00000000402, 1.7217712844, 3738.761430108],
    [0.00000000503, 3.41456622371, 1592.5960136328],
    [0.0000000039, 5.36711219721, 26.2983197998],
    [0.00000000372, 4.35153585802, 553.5694028424],
    [0.00000000458, 0.85618925594, 156137.47598479927],
    [0.00000000325, 2.94948293011, 951.7184062506],
    [0.00000000321, 2.01798251637, 1990.745017041],
    [0.00000000335, 1.12608331535, 4690.4798363586],
    [0.00000000366, 0.10449761483, 12721.572099417],
    [0.00000000287, 2.26476426223, 242.728603974],
    [0.00000000347, 1.3424894863, 5481.2549188676],
    [0.00000000368, 3.91910931412, 9437.762934887],
    [0.00000000255, 1.83876117314, 11371.7046897582],
    [0.00000000242, 4.9232700131, 8827.3902698748],
    [0.00000000307, 1.5681733016, 1349.8674096588],
    [0.00000000242, 0.12263961387, 1748.016413067],
    [0.00000000222, 4.88851960168, 4164.311989613],
    [0.0000000023, 1.05870192923, 3154.6870848956],
    [0.00000000204, 0.44240387853, 11769.8536931664],
    [0.00000000188, 5.6588899347, 7875.6718636242],
    [0.00000000189, 0.61654841817, 2388.8940204492],
    [0.00000000233, 5.23023625373, 7084.8967811152],
    [0.00000000183, 4.10128236867, 7342.4577801806],
    [0.00000000173, 0.52511015365, 10977.078804699],
    [0.00000000159, 2.72294432534, 4292.3308329504],
    [0.00000000207, 2.28587256917, 13367.9726311066],
    [0.00000000202, 3.21445201981, 10973.55568635],
    [0.00000000145, 5.45882589245, 398.1490034082],
    [0.00000000155, 5.81412827494, 12410.7313005486],
    [0.00000000134, 4.56296979111, 10575.4066829418],
    [0.00000000127, 4.8461256756, 13119.72110282519],
    [0.00000000115, 4.96539448045, 2146.1654164752],
    [0.00000000125, 3.87814283336, 12562.6285816338],
    [0.00000000125, 0.17913722961, 8635.9420037632],
    [0.00000000122, 1.0501917611, 12592.4500197826],
    [0.00000000111, 2.1576583524, 1577.3435424478],
    [0.00000000134, 6.25201667258, 3930.2096962196],
    [0.00000000107, 3.43601884429, 13517.8701062334],
    [0.00000000102, 4.37125144267, 10988.808157535],
    [0.00000000095, 5.98656941724, 17260.1546546904],
    [0.000000001, 2.34969093002, 13095.8426650774],
    [0.0000000011, 3.6376895807, 5223.6939198022],
    [0.00000000085, 4.32512089859, 3894.1818295422],
    [0.00000000109, 3.99726753431, 12539.853380183],
    [0.00000000079, 5.22586609526, 16730.4636895958],
    [0.00000000079, 0.08497701397, 10447.3878396044],
    [0.00000000076, 4.1184637433, 12323.4230960088],
    [0.00000000105, 3.53845510796, 5642.1982426092],
    [0.00000000075, 5.73067319226, 6709.6740408674],
    [0.00000000075, 0.91786038039, 5856.4776591154],
    [0.00000000082, 5.90914298142, 10177.2576795336],
    [0.000000001, 0.66749297482, 250570.6758572191],
    [0.00000000071, 0.59970099558, 14314.1681130498],
    [0.00000000092, 1.9824056447, 13916.0191096416],
    [0.00000000091, 3.10960444681, 6923.9534573736],
    [0.00000000082, 4.00218490582, 31415.379249957],
    [0.00000000083, 5.97854162397, 95143.1329209781],
    [0.00000000061, 4.23984291228, 8273.8208670324],
    [0.00000000055, 1.41429091428, 5643.1785636774],
    [0.00000000057, 4.71394484871, 639.897286314],
    [0.00000000054, 5.63153101737, 16496.3613962024],
    [0.00000000075, 5.01329496789, 71430.69561812909],
    [0.00000000055, 3.83548544187, 13341.6743113068],
    [0.00000000052, 4.39839251424, 3634.6210245184],
    [0.00000000056, 1.31106242697, 15720.8387848784],
    [0.0000000005, 4.18716262207, 12573.2652469836],
    [0.00000000064, 3.35781526441, 4732.0306273434],
    [0.00000000066, 5.49585898905, 2787.0430238574],
    [0.00000000048, 2.02353005537, 13362.4497067992],
    [0.00000000049, 2.48296676043, 14143.4952424306],
    [0.00000000053, 4.12375134867, 14919.0178537546],
    [0.00000000047, 3.82959048333, 12964.300703391],
    [0.00000000042, 0.38069707842, 24072.9214697764],
    [0.00000000051, 1.26573618407, 6195.76764545159],
    [0.00000000051, 5.38279738858, 6370.3840545312],
    [0.00000000048, 0.59989438773, 2118.7638603784],
    [0.00000000041, 2.49731951011, 18319.5365848796],
    [0.00000000041, 4.09328168773, 3185.1920272656],
    [0.00000000056, 1.01626259839, 84672.47584450469],
    [0.00000000039, 4.27641929836, 20426.571092422],
    [0.00000000053, 3.21190793912, 239424.39025435288],
    [0.0000000004, 6.05039617409, 3496.032826134],
    [0.00000000044, 1.67103342381, 8662.240323563],
    [0.00000000043, 3.69693055127, 18139.2945014159],
    [0.00000000035, 3.60804630271, 18875.525869774],
    [0.00000000035, 6.09077128153, 10419.9862835076],
    [0.00000000033, 0.53088739877, 10213.285546211],
    [0.00000000031, 0.64652215197, 23013.5395395872],
    [0.00000000035, 0.91150627653, 9779.1086761254],
    [0.0000000003, 4.39715700541, 12808.8803039568],
    [0.00000000042, 5.61217219717, 82576.9812209953],
    [0.00000000031, 5.53053428232, 14712.317116458],
    [0.00000000041, 5.62875780162, 17789.845619785],
    [0.00000000031, 0.76672410297, 22779.4372461938],
    [0.00000000028, 2.34481351815, 5429.8794682394],
    [0.00000000027, 4.68961132588, 16200.7727245012],
    [0.00000000028, 3.91086715449, 11015.1064773348],
    [0.00000000026, 2.2939398067, 9623.6882766912],
    [0.00000000026, 4.35459376595, 2942.4634232916],
    [0.00000000026, 1.75234208326, 18209.33026366019],
    [0.00000000025, 6.04606961258, 9917.6968745098],
    [0.00000000025, 2.68813215214, 3583.3410306738],
    [0.00000000026, 0.90493478768, 12012.5822971404],
    [0.00000000023, 2.29788589227, 9380.9596727172],
    [0.00000000023, 2.49168005831, 12559.038152982],
    [0.00000000023, 2.2672722651, 26709.6469424134],
    [0.00000000024, 4.92046069591, 77713.7714681205],
    [0.00000000022, 5.99172814093, 6993.0088985497],
    [0.00000000021, 2.38334945179, 17256.6315363414],
    [0.00000000023, 0.80841468126, 149854.4001348079],
    [0.00000000026, 3.19870156016, 84334.66158130829],
    [0.00000000023, 2.53410224481, 19651.048481098],
    [0.00000000019, 1.93058658449, 11926.2544136688],
    [0.00000000018, 2.28255799994, 11614.4332937322],
    [0.00000000019, 3.66100662326, 30639.856638633],
    [0.00000000022, 3.76382094449, 17298.1823273262],
    [0.00000000019, 5.39096925285, 16460.33352952499],
    [0.00000000023, 4.78353231767, 72850.56171524568],
    [0.00000000018, 3.19936496001, 18073.7049386502],
    [0.00000000017, 3.95703025, 8982.810669309],
    [0.00000000021, 3.773680817, 16858.4825329332],
    [0.00000000021, 4.4704781938, 12036.4607348882],
    [0.00000000015, 0.65562803693, 16062.1845261168],
    [0.00000000014, 4.12927933278, 2352.8661537718],
    [0.00000000015, 4.21849500083, 20199.094959633],
    [0.00000000014, 0.1594751118, 22483.84857449259],
    [0.00000000019, 2.81419648175, 8671.9698704406],
    [0.00000000014, 1.26341547558, 90279.92316810328],
    [0.00000000016, 0.41160329502, 23543.23050468179],
    [0.00000000012, 2.70990889006, 17996.0311682222],
    [0.00000000012, 0.7222297509, 19402.7969528166],
    [0.00000000012, 4.37880728616, 10818.1352869158],
    [0.00000000015, 0.57625721169, 12567.132021051],
    [0.00000000011, 1.78472830783, 28766.924424484],
    [0.00000000013, 3.18567583228, 5573.1428014331],
    [0.00000000011, 4.93327896664, 18451.07854656599],
    [0.00000000011, 5.4358799226, 14945.3161735544],
    [0.00000000011, 2.2460750863, 35371.8872659764],
    [0.00000000011, 5.02228901732, 22805.7355659936],
    [0.0000000001, 2.16930383321, 15664.03552270859],
    [0.00000000014, 1.93314444705, 21228.3920235458],
    [0.0000000001, 6.05310595892, 23141.5583829246],
    [0.0000000001, 2.55645282698, 22345.2603761082],
    [0.00000000009, 1.49155179482, 29826.3063546732],
    [0.0000000001, 0.18358815992, 12779.4507954208],
    [0.00000000011, 4.05473090705, 23581.2581773176],
    [0.00000000011, 0.39656469738, 25158.6017197654],
];

const X3: &[Term] = &[
    [0.00000175213, PI, 0.0],
    [0.00000072337, 2.89303952476, 12566.1516999828],
    [0.00000008364, 3.85500954096, 6283.0758499914],
    [0.0000000504, 2.53152989786, 18849.2275499742],
    [0.00000001481, 2.23672235234, 6438.4962494256],
    [0.00000001481, 4.41181122031, 6127.6554505572],
    [0.00000000644, 4.8856790478, 6279.5527316424],
    [0.00000000644, 1.76285452485, 6286.5989683404],
    [0.00000000318, 3.63840310183, 6040.3472460174],
    [0.00000000318, 3.01013047082, 6525.8044539654],
    [0.0000000022, 2.34166945312, 25132.3033999656],
    [0.00000000201, 0.8271476081, 6836.6452528338],
    [0.00000000201, 5.82138596455, 5729.506447149],
    [0.00000000036, 1.41202770454, 12569.6748183318],
    [0.00000000033, 4.23554585611, 12410.7313005486],
    [0.00000000018, 2.32709487755, 12721.572099417],
    [0.00000000011, 6.27313981891, 12592.4500197826],
    [0.00000000006, 2.56028859854, 242.728603974],
];

const X4: &[Term] = &[
    [0.00000004022, 0.0, 0.0],
    [0.00000001927, 1.18746233453, 12566.1516999828],
    [0.00000000491, 5.29890244491, 6283.0758499914],
    [0.0000000021, 3.74319530048, 6438.4962494256],
    [0.0000000021, 2.90533827217, 6127.6554505572],
    [0.00000000229, 0.88072621187, 18849.2275499742],
    [0.00000000044, 4.59638160457, 709.9330485583],
    [0.00000000021, 0.18394116301, 6279.5527316424],
    [0.00000000021, 0.18140710246, 6286.5989683404],
    [0.00000000013, 3.81035106449, 83996.84731811189],
    [0.00000000011, 0.6555293119, 25132.3033999656],
    [0.00000000009, 5.19374498802, 11856.2186514245],
    [0.00000000007, 6.16589776486, 167283.7615876655],
    [0.00000000005, 2.68915538708, 12410.7313005486],
    [0.00000000006, 5.56853736836, 156137.47598479927],
];

const X5: &[Term] = &[
    [0.00000000108, 0.0, 0.0],
    [0.00000000043, 6.08789652058, 12566.1516999828],
    [0.00000000025, 5.33779665346, 6438.4962494256],
    [0.00000000025, 1.31073691919, 6127.6554505572],
    [0.0000000002, 0.94333339828, 6283.0758499914],
    [0.00000000008, 5.52588061142, 18849.2275499742],
];

const Y0: &[Term] = &[
    [0.9998921103, 0.18265890456, 6283.0758499914],
    [0.02442699036, PI, 0.0],
    [0.00835292314, 0.13952878991, 12566.1516999828],
    [0.00010466965, 0.09641690558, 18849.2275499742],
    [0.00003110838, 5.38114091484, 83996.84731811189],
    [0.00002570338, 5.3010397336, 529.6909650946],
    [0.00002147473, 2.66253538905, 1577.3435424478],
    [0.00001709219, 5.20780401071, 6279.5527316424],
    [0.00001707987, 4.58232858766, 6286.5989683404],
    [0.00001440265, 1.90068164664, 2352.8661537718],
    [0.00001135092, 5.2731341522, 5223.6939198022],
    [0.00000934539, 4.50301201844, 12036.4607348882],
    [0.00000900565, 1.6056328812, 10213.285546211],
    [0.00000567126, 0.58142248753, 1059.3819301892],
    [0.00000744932, 2.80728871886, 398.1490034082],
    [0.00000639316, 6.02923915017, 5753.3848848968],
    [0.00000681324, 0.64729627497, 4705.7323075436],
    [0.00000611347, 3.81381495286, 6812.766815086],
    [0.00000450435, 4.52785572489, 5884.9268465832],
    [0.00000452018, 5.99167242707, 6256.7775301916],
    [0.00000449968, 3.79880375595, 6309.3741697912],
    [0.0000055139, 3.96125249369, 5507.5532386674],
    [0.00000406334, 5.25616268027, 6681.2248533996],
    [0.00000541273, 5.49902805917, 775.522611324],
    [0.0000054636, 6.17311131785, 14143.4952424306],
    [0.00000507084, 2.87025193381, 7860.4193924392],
    [0.00000219504, 2.95216139568, 11506.7697697936],
    [0.00000227937, 5.95179248814, 7058.5984613154],
    [0.00000227792, 4.84547074733, 4694.0029547076],
    [0.00000255845, 0.69454231563, 12168.0026965746],
    [0.00000256132, 6.16722512388, 709.9330485583],
    [0.00000179242, 1.40003446021, 796.2980068164],
    [0.0000017828, 5.11717552231, 6283.0085396886],
    [0.0000017828, 4.67307255246, 6283.14316029419],
    [0.00000155454, 0.05340525434, 25132.3033999656],
    [0.00000206257, 4.28366728882, 11790.6290886588],
    [0.00000149769, 6.07429023278, 5486.777843175],
    [0.00000200005, 2.5014408812, 17789.845619785],
    [0.00000129006, 3.64623708634, 7079.3738568078],
    [0.00000128211, 3.23254821381, 3738.761430108],
    [0.0000015279, 5.5812080045, 213.299095438],
    [0.00000118725, 5.45361490488, 9437.762934887],
    [0.00000078419, 0.28253093914, 8827.3902698748],
    [0.00000073513, 1.1243337188, 1589.0728952838],
    [0.00000065694, 2.08898587059, 11769.8536931664],
    [0.0000006324, 0.6704449157, 6262.300454499],
    [0.00000062961, 2.83649755996, 6303.8512454838],
    [0.0000008587, 1.45351152151, 167283.7615876655],
    [0.00000063616, 0.49038985445, 7.1135470008],
    [0.0000008074, 0.922258054, 6069.7767545534],
    [0.00000083511, 4.63223527298, 3340.6124266998],
    [0.00000060039, 1.82878888713, 4136.9104335162],
    [0.00000075626, 2.58860726122, 6496.3749454294],
    [0.00000058089, 0.55165509745, 10977.078804699],
    [0.00000053747, 6.27553948416, 1194.4470102246],
    [0.00000057574, 1.1080213427, 6282.0955289232],
    [0.00000057574, 2.39891957636, 6284.0561710596],
    [0.00000051141, 6.02458046766, 6290.1893969922],
    [0.00000050679, 3.77133779892, 6275.9623029906],
    [0.00000049613, 1.07290390127, 6127.6554505572],
    [0.00000047934, 2.43176952238, 6438.4962494256],
    [0.00000061133, 5.34335721244, 3154.6870848956],
    [0.00000048425, 0.0583318371, 801.8209311238],
    [0.00000047359, 4.53607945311, 3128.3887650958],
    [0.00000048379, 0.25856696781, 7084.8967811152],
    [0.00000051293, 4.21367834558, 12352.8526045448],
    [0.0000005063, 0.48144269678, 11856.2186514245],
    [0.00000037539, 1.60040603609, 8429.2412664666],
    [0.00000049347, 2.15740113992, 2544.3144198834],
    [0.00000039555, 3.35943284176, 5481.2549188676],
    [0.00000048913, 5.1653104904, 9225.539273283],
    [0.00000042135, 2.0653256004, 17260.1546546904],
    [0.00000037954, 1.47005640108, 426.598190876],
    [0.0000003114, 3.61579568733, 2146.1654164752],
    [0.00000032603, 4.41806626166, 4164.311989613],
    [0.00000039728, 4.70048863454, 5856.4776591154],
    [0.00000028515, 4.53853388964, 12569.6748183318],
    [0.00000036368, 1.33416490018, 18073.7049386502],
    [0.00000025032, 3.74982021361, 26.2983197998],
    [0.00000030329, 0.42324614391, 4535.0594369244],
    [0.00000026741, 5.97172882162, 3930.2096962196],
    [0.00000028166, 5.19366222912, 12562.6285816338],
    [0.00000024843, 1.00265326013, 5088.6288397668],
    [0.00000021642, 3.06444526478, 12559.038152982],
    [0.00000025701, 0.75895390818, 13367.9726311066],
    [0.00000020498, 3.44435384536, 11371.7046897582],
    [0.00000025997, 1.87312778491, 71430.69561812909],
    [0.00000017888, 5.01504194498, 1748.016413067],
    [0.00000023246, 4.61910038205, 18319.5365848796],
    [0.00000017077, 5.29722216277, 4933.2084403326],
    [0.0000002107, 2.22959477131, 7477.522860216],
    [0.00000017512, 6.16192589291, 10447.3878396044],
    [0.00000020024, 2.96823180998, 8031.0922630584],
    [0.00000013831, 3.02450528624, 8635.9420037632],
    [0.00000014095, 6.03707103538, 2942.4634232916],
    [0.00000018884, 0.85614789376, 156137.47598479927],
    [0.00000017861, 4.86809570283, 1592.5960136328],
    [0.00000013605, 3.6264114503, 13095.8426650774],
    [0.00000015078, 1.55132224732, 16496.3613962024],
    [0.00000017985, 2.07741211308, 17298.1823273262],
    [0.00000014386, 6.14898732933, 20426.571092422],
    [0.00000012227, 4.38359423735, 7632.9432596502],
    [0.00000013376, 2.03616887071, 12139.5535091068],
    [0.00000011583, 3.88971333608, 5331.3574437408],
    [0.00000013558, 1.44666331503, 16730.4636895958],
    [0.00000014332, 4.45678693729, 7342.4577801806],
    [0.00000012375, 1.53862289477, 6279.4854213396],
    [0.00000012366, 1.96831814872, 6286.6662786432],
    [0.00000012446, 5.78094918529, 15110.4661198662],
    [0.00000010989, 0.62040343662, 10988.808157535],
    [0.00000012556, 2.59194808538, 15720.8387848784],
    [0.00000011583, 2.48165809843, 5729.506447149],
    [0.00000009023, 3.85655029499, 9623.6882766912],
    [0.00000009121, 5.83006047147, 7234.794256242],
    [0.00000008869, 3.4761126529, 6148.010769956],
    [0.00000008614, 0.03081589303, 6418.1409300268],
    [0.00000007911, 1.58348238359, 2118.7638603784],
    [0.00000008293, 0.85407021371, 14712.317116458],
    [0.00000010219, 0.1307517954, 1349.8674096588],
    [0.00000010126, 0.9963000863, 6836.6452528338],
    [0.0000001048, 1.38209301929, 5999.2165311262],
    [0.00000007353, 3.83220307326, 6040.3472460174],
    [0.0000000982, 2.12476655144, 6566.9351688566],
    [0.00000007018, 5.94659180519, 6525.8044539654],
    [0.00000006874, 4.57503512461, 7238.6755916],
    [0.00000007545, 5.9484344443, 12539.853380183],
    [0.0000000954, 3.49613271706, 21228.3920235458],
    [0.00000007202, 4.31311898936, 6245.0481773556],
    [0.00000007144, 5.47703560836, 6321.1035226272],
    [0.00000006627, 5.41373102778, 5327.4761083828],
    [0.00000008544, 1.82829301857, 11015.1064773348],
    [0.00000008602, 5.4395357531, 5643.1785636774],
    [0.00000006158, 5.65852675233, 12964.300703391],
    [0.00000007414, 3.46720433621, 23543.23050468179],
    [0.00000007317, 2.01664477821, 536.8045120954],
    [0.00000006352, 3.46461304398, 1990.745017041],
    [0.00000006251, 1.52860898333, 951.7184062506],
    [0.00000005828, 1.37555383064, 955.5997416086],
    [0.00000006389, 2.40580071461, 24072.9214697764],
    [0.00000006976, 4.76626361488, 10973.55568635],
    [0.00000006916, 5.39658071678, 522.5774180938],
    [0.00000007459, 2.7113389887, 22003.9146348698],
    [0.00000005376, 2.349685055, 14314.1681130498],
    [0.00000006852, 4.33781274406, 155.4203994342],
    [0.00000007527, 1.94392127074, 18422.62935909819],
    [0.00000006222, 0.67296135144, 18451.07854656599],
    [0.00000005836, 0.75921238848, 639.897286314],
    [0.00000006487, 2.22135874272, 5216.5803728014],
    [0.00000006251, 2.88399458161, 6288.5987742988],
    [0.00000006251, 0.62294633745, 6277.552925684],
    [0.00000007004, 3.57492830242, 103.0927742186],
    [0.00000005337, 1.97127813671, 4690.4798363586],
    [0.00000005605, 1.92150700481, 1551.045222648],
    [0.0000000621, 0.81866451118, 5650.2921106782],
    [0.00000006064, 5.1970877987, 5230.807466803],
    [0.00000004596, 2.92936593195, 553.5694028424],
    [0.00000005386, 5.40633950052, 77713.7714681205],
    [0.00000006332, 2.83725098708, 26087.9031415742],
    [0.00000006196, 4.15787078176, 84672.47584450469],
    [0.0000000616, 3.21170435536, 239424.39025435288],
    [0.00000005016, 1.46006858313, 4732.0306273434],
    [0.00000005414, 1.428823252, 6179.9830757728],
    [0.00000005413, 2.08325983447, 6386.16862421],
    [0.00000004863, 2.19642746549, 90279.92316810328],
    [0.00000005711, 2.75630374926, 6915.8595893046],
    [0.0000000427, 0.81269903423, 7875.6718636242],
    [0.00000004017, 2.21501265909, 6254.6266625236],
    [0.00000004071, 3.99159158863, 3634.6210245184],
    [0.00000003993, 1.29192500625, 6311.5250374592],
    [0.00000004858, 1.27914374675, 5760.4984318976],
    [0.00000005274, 4.91687036691, 25158.6017197654],
    [0.0000000412, 1.72568521475, 6709.6740408674],
    [0.0000000441, 2.2353626421, 6805.6532680852],
    [0.00000003174, 3.62030131501, 1066.49547719],
    [0.00000003064, 2.46605561478, 5863.5912061162],
    [0.00000003083, 5.68731909779, 9917.6968745098],
    [0.00000003385, 3.81076637101, 13916.0191096416],
    [0.00000002979, 4.62987940723, 12566.2190102856],
    [0.0000000398, 5.90917210624, 13341.6743113068],
    [0.0000000329, 0.95752698537, 16200.7727245012],
    [0.00000003885, 3.94360149823, 74.7815985673],
    [0.0000000306, 1.63142398497, 18052.9295431578],
    [0.00000003745, 3.65023712104, 5966.6839803348],
    [0.00000003592, 4.03843804285, 6208.2942514241],
    [0.00000003581, 5.75234129258, 6357.8574485587],
    [0.00000003626, 6.13871061291, 6599.467719648],
    [0.00000002927, 1.79201822142, 12721.572099417],
    [0.00000003625, 1.43112641053, 6019.9919266186],
    [0.00000002589, 2.27559640821, 12592.4500197826],
    [0.00000002558, 6.08151329647, 10575.4066829418],
    [0.0000000267, 2.64370887209, 3.523118349],
    [0.00000002611, 0.86180315523, 6702.5604938666],
    [0.00000002535, 0.01231078888, 31415.379249957],
    [0.0000000352, 3.80906746266, 250570.6758572191],
    [0.00000003434, 2.07577333297, 6546.1597733642],
    [0.00000002378, 2.05651519036, 2388.8940204492],
    [0.00000002979, 5.07398237708, 12566.08438968],
    [0.00000002716, 1.49855840728, 12029.3471878874],
    [0.00000002215, 3.69574321309, 13362.4497067992],
    [0.00000003049, 0.05228873308, 29088.811415985],
    [0.00000002784, 3.37954165171, 14945.3161735544],
    [0.00000002284, 4.38146814547, 6076.8903015542],
    [0.00000002529, 4.37629589914, 12043.574281889],
    [0.00000002015, 0.91352603582, 6262.7205305926],
    [0.00000002218, 5.40562909521, 6489.2613984286],
    [0.00000002005, 2.5934426377, 6303.4311693902],
    [0.00000002681, 5.85620039558, 4590.910180489],
    [0.00000002011, 5.69828891426, 4701.1165017084],
    [0.0000000244, 4.55844746985, 149.5631971346],
    [0.000000026, 3.93109819647, 19651.048481098],
    [0.00000002197, 5.22411628121, 13517.8701062334],
    [0.00000001893, 4.09716259686, 6286.9571853494],
    [0.00000001893, 5.69296362938, 6279.1945146334],
    [0.00000002402, 4.8450325327, 1162.4747044078],
    [0.00000002156, 0.43826128691, 18139.2945014159],
    [0.00000001778, 2.79119893202, 4292.3308329504],
    [0.00000001966, 1.82224928185, 4686.8894077068],
    [0.00000002327, 2.83472726504, 10021.8372800994],
    [0.00000002436, 2.8368987328, 95143.1329209781],
    [0.00000002163, 6.13036765564, 6037.244203762],
    [0.00000001841, 3.6794737319, 242.728603974],
    [0.00000001672, 0.33097080655, 13119.72110282519],
    [0.0000000225, 0.82649282051, 12669.2444742014],
    [0.00000001627, 4.77445737868, 13521.7514415914],
    [0.00000001888, 2.87850805387, 8662.240323563],
    [0.00000002052, 3.65927016475, 6528.9074962208],
    [0.00000001774, 0.51400448882, 6819.8803620868],
    [0.0000000184, 1.91711006767, 65147.6197681377],
    [0.00000001544, 1.33911061474, 110.2063212194],
    [0.00000001756, 2.96482886554, 5746.271337896],
    [0.00000001543, 4.39018655159, 6272.4391846416],
    [0.00000001543, 5.39993967465, 6293.7125153412],
    [0.00000001952, 3.09643550846, 23013.5395395872],
    [0.00000001484, 2.15301976837, 20.7753954924],
    [0.00000001558, 2.79679951671, 17654.7805397496],
    [0.0000000144, 0.69014829975, 1052.2683831884],
    [0.00000001648, 3.98135416194, 632.7837393132],
    [0.00000001795, 1.47161886169, 33019.0211122046],
    [0.00000001488, 4.10377440731, 76.2660712756],
    [0.00000001349, 4.18018072818, 6016.4688082696],
    [0.00000001477, 2.56925128481, 12779.4507954208],
    [0.00000001252, 6.26830198321, 11499.6562227928],
    [0.00000001491, 4.65893645946, 9411.4646150872],
    [0.00000001471, 4.1869545653, 18635.9284545362],
    [0.00000001263, 5.62967869388, 12573.2652469836],
    [0.00000001385, 2.65776727703, 2379.1644735716],
    [0.00000001272, 5.60977857361, 6549.6828917132],
    [0.00000001578, 4.10046385407, 25934.1243310894],
    [0.00000001557, 4.78614835776, 18875.525869774],
    [0.00000001358, 0.33781842226, 5120.6011455836],
    [0.00000001505, 2.70837129901, 18209.33026366019],
    [0.0000000146, 3.40156973977, 245.8316462294],
    [0.00000001252, 6.12407876457, 6993.0088985497],
    [0.00000001242, 1.27359177098, 24356.7807886416],
    [0.00000001464, 3.73000165992, 38.1330356378],
    [0.00000001028, 0.93950338023, 6112.4029793722],
    [0.00000001014, 4.3607292663, 17256.6315363414],
    [0.00000001312, 5.8133049646, 12491.3701014155],
    [0.00000000992, 2.56738139157, 6453.7487206106],
    [0.00000000988, 5.69171453384, 8273.8208670324],
    [0.00000001191, 1.64765684664, 6276.02961329339],
    [0.00000001191, 1.85928407242, 6290.1220866894],
    [0.00000000978, 3.16773119822, 6247.04798331399],
    [0.00000001223, 6.22694723537, 5429.8794682394],
    [0.00000000971, 0.33921097188, 6319.1037166688],
    [0.00000000962, 1.06488912173, 12565.1713789146],
    [0.00000001025, 0.64688768472, 12545.3763044904],
    [0.00000001234, 2.50427756599, 22483.84857449259],
    [0.00000001134, 5.76287831677, 17782.7320727842],
    [0.00000000944, 5.49712708636, 6306.9542877392],
    [0.00000000944, 4.29299913988, 6259.1974122436],
    [0.00000001092, 2.35048657695, 17796.9591667858],
    [0.00000000995, 1.11794413013, 10177.2576795336],
    [0.00000000894, 2.9468168362, 206.1855484372],
    [0.00000001216, 5.61396859194, 82576.9812209953],
    [0.0000000086, 6.19327755003, 1692.1656695024],
    [0.00000000942, 6.13301518193, 6267.82337880639],
    [0.00000000942, 3.6571110443, 6298.3283211764],
    [0.00000001045, 5.17292899506, 15508.6151232744],
    [0.0000000085, 6.16443178844, 6393.2821712108],
    [0.00000000873, 2.86766306801, 949.1756089698],
    [0.00000000896, 0.83013691514, 3903.9113764198],
    [0.00000001023, 5.42813246189, 220.4126424388],
    [0.00000000856, 1.36181993943, 4804.209275927],
    [0.00000001033, 3.31340063953, 5573.1428014331],
    [0.00000000817, 3.58855573226, 6172.869528772],
    [0.00000000917, 0.8991999371, 149854.4001348079],
    [0.00000001081, 2.89245979526, 36949.2308084242],
    [0.00000000779, 2.01260281552, 2648.454825473],
    [0.00000000962, 2.35578735539, 12567.132021051],
    [0.0000000099, 4.97210778261, 11403.676995575],
    [0.00000000739, 3.39896198161, 11926.2544136688],
    [0.00000000929, 0.64994792213, 2787.0430238574],
    [0.00000000973, 6.19358824421, 22805.7355659936],
    [0.00000000743, 2.22828430376, 7834.1210726394],
    [0.00000000905, 2.2445918366, 6284.5603226997],
    [0.00000000905, 1.26234908246, 6281.5913772831],
    [0.00000000798, 1.05421393588, 12410.7313005486],
    [0.00000000813, 5.23283372183, 12416.5885028482],
    [0.00000000869, 1.74785663537, 6133.5126528568],
    [0.00000000756, 5.40063116731, 4061.2192153944],
    [0.00000000616, 4.1338975577, 1596.1864422846],
    [0.00000000724, 1.49651873854, 161000.6857376741],
    [0.00000000612, 5.89184406078, 16858.4825329332],
    [0.00000000814, 3.82004246488, 3894.1818295422],
    [0.00000000785, 2.44918664136, 4907.3020501456],
    [0.00000000788, 1.86746379419, 846.0828347512],
    [0.00000000611, 6.24387943735, 853.196381752],
    [0.0000000057, 2.97586328906, 12586.9270954752],
    [0.00000000561, 5.85814246596, 12323.4230960088],
    [0.00000000646, 5.91116942848, 52175.8062831484],
    [0.0000000059, 0.47736597307, 15671.0817594066],
    [0.00000000555, 2.86698301793, 11513.8833167944],
    [0.00000000536, 4.49580958272, 18852.7506683232],
    [0.00000000737, 5.41358302312, 23581.2581773176],
    [0.00000000532, 3.01682571392, 18842.11400297339],
    [0.00000000552, 6.08260944683, 11933.3679606696],
    [0.00000000599, 0.54713576844, 6151.533888305],
    [0.0000000054, 1.83361074884, 6279.7894925736],
    [0.0000000054, 1.67333017022, 6286.3622074092],
    [0.00000000513, 2.13211972766, 12455.9453787634],
    [0.00000000649, 3.33488856037, 11764.330768859],
    [0.00000000582, 2.96012819576, 6414.6178116778],
    [0.00000000608, 2.37588807672, 10419.9862835076],
    [0.0000000062, 0.83937590497, 5326.7866940208],
    [0.00000000536, 2.13145334966, 7232.2514589612],
    [0.00000000538, 1.33481115516, 5333.9002410216],
    [0.00000000516, 1.35797709246, 433.7117378768],
    [0.00000000596, 0.99065349155, 6062.6632075526],
    [0.00000000664, 4.31358012484, 40879.4405046438],
    [0.00000000607, 4.79849916312, 5849.3641121146],
    [0.00000000629, 1.34455816041, 26735.9452622132],
    [0.00000000479, 6.04755907663, 5547.1993364596],
    [0.00000000565, 5.49238261982, 4171.4255366138],
    [0.00000000472, 3.8118180473, 10969.9652576982],
    [0.00000000462, 3.53729128828, 3104.9300594238],
    [0.00000000551, 2.4679479802, 6503.4884924302],
    [0.00000000535, 4.55197627124, 173566.83743765688],
    [0.0000000045, 0.38613288324, 4274.5183108324],
    [0.00000000527, 4.67747327047, 24602.61243487099],
    [0.00000000502, 5.68646136646, 12489.8856287072],
    [0.00000000603, 5.5672595424, 322711.30452390644],
    [0.00000000432, 5.22277533085, 9388.0059094152],
    [0.0000000053, 5.14730101928, 18845.7044316252],
    [0.00000000431, 3.7406631488, 7018.9523635232],
    [0.00000000484, 0.31541423564, 14.2270940016],
    [0.0000000056, 0.14432555287, 1581.959348283],
    [0.00000000584, 4.7838079249, 72850.56171524568],
    [0.00000000408, 4.98636538552, 3496.032826134],
    [0.00000000569, 1.38164944312, 97238.62754448749],
    [0.00000000478, 4.5827555012, 29296.6153895786],
    [0.00000000389, 1.85967717576, 6244.9428143536],
    [0.00000000389, 1.6472637433, 6321.2088856292],
    [0.00000000388, 5.85202122263, 6297.302943993],
    [0.00000000388, 3.93810500361, 6268.8487559898],
    [0.00000000515, 0.0999570364, 12320.3200537534],
    [0.00000000395, 1.39225625253, 4157.1984426122],
    [0.00000000492, 4.39757189321, 1478.8665740644],
    [0.00000000423, 2.45281376602, 9779.1086761254],
    [0.00000000439, 3.25487944876, 233141.3144043615],
    [0.00000000501, 3.08355690853, 17157.0618804718],
    [0.00000000416, 2.17399987974, 13760.5987102074],
    [0.00000000503, 4.02857067171, 135.0650800354],
    [0.00000000393, 6.27884951137, 7872.1487452752],
    [0.00000000365, 0.53940975175, 6922.9731363054],
    [0.00000000409, 6.14577564379, 10984.1923516998],
    [0.00000000371, 4.19153897517, 13625.533630172],
    [0.0000000037, 2.79623025524, 14919.0178537546],
    [0.00000000499, 1.15482230725, 161710.6187862324],
    [0.00000000379, 5.5265043053, 3185.1920272656],
    [0.0000000042, 1.76851201552, 22779.4372461938],
    [0.00000000485, 6.0668309636, 12528.018664345],
    [0.00000000358, 1.58658367058, 6271.3464971554],
    [0.00000000358, 1.92035724848, 6294.8052028274],
    [0.00000000354, 2.96580857786, 17267.26820169119],
    [0.00000000351, 0.64808322427, 11616.976091013],
    [0.00000000388, 5.20354943335, 956.2891559706],
    [0.00000000409, 2.03946298626, 21954.15760939799],
    [0.00000000369, 3.36327405725, 5436.9930152402],
    [0.00000000421, 3.25654135729, 7445.5505543992],
    [0.00000000361, 5.53538077166, 21393.5419698576],
    [0.00000000336, 6.12569565789, 6279.1436967283],
    [0.00000000336, 3.66443056835, 6287.0080032545],
    [0.0000000045, 1.80230243402, 1385.5615749511],
    [0.00000000315, 3.47678894225, 10873.9860304804],
    [0.00000000363, 2.7199014567, 7335.3442331798],
    [0.00000000347, 5.27040068469, 17253.04110768959],
    [0.00000000349, 1.04077270827, 316.3918696566],
    [0.00000000395, 3.8234829317, 5905.7022420756],
    [0.00000000308, 2.54337606421, 20995.3929664494],
    [0.00000000319, 5.30613709521, 38.0276726358],
    [0.00000000304, 4.87224757874, 5749.8617665478],
    [0.00000000414, 5.73458482925, 44809.6502008634],
    [0.00000000298, 2.28443357697, 640.8776073822],
    [0.00000000351, 4.36315900786, 12345.739057544],
    [0.00000000304, 3.36893995706, 29826.3063546732],
    [0.00000000395, 4.78955929514, 4176.041342449],
    [0.00000000329, 5.8796113401, 3.9321532631],
    [0.00000000374, 5.15697532254, 5642.1982426092],
    [0.0000000032, 0.92923666608, 10818.1352869158],
    [0.00000000365, 5.96664322939, 6660.4494579072],
    [0.00000000339, 4.53749520696, 6923.9534573736],
    [0.00000000357, 1.12153755723, 16460.33352952499],
    [0.00000000386, 0.71941423743, 2636.725472637],
    [0.00000000273, 5.79109432105, 26709.6469424134],
    [0.00000000265, 3.53930695872, 19378.9185150688],
    [0.00000000325, 0.92198442483, 12359.9661515456],
    [0.00000000278, 3.86335874809, 20597.2439630412],
    [0.00000000294, 2.59935512947, 28286.9904848612],
    [0.00000000269, 4.91776226798, 6816.289933435],
    [0.00000000357, 2.74654149425, 30666.1549584328],
    [0.00000000344, 1.94480070409, 6147.4505249814],
    [0.00000000255, 3.37524772579, 1375.7737998458],
    [0.00000000308, 5.40069482744, 29864.334027309],
    [0.00000000334, 1.56223513612, 6418.7011750014],
    [0.00000000316, 3.97125662279, 6055.5997172024],
    [0.00000000243, 2.53093250846, 6310.4774060882],
    [0.00000000243, 0.9760084106, 6255.6742938946],
    [0.00000000296, 4.79138384974, 6129.2970395066],
    [0.00000000301, 5.81886973641, 6510.5519827804],
    [0.00000000329, 5.86928788098, 377.3736079158],
    [0.00000000282, 3.64505853337, 263.0839233728],
    [0.00000000267, 1.84936252726, 24705.70520908959],
    [0.00000000285, 0.93414827012, 5469.5255660316],
    [0.00000000234, 0.33992064306, 5017.508371365],
    [0.00000000286, 4.99886287753, 6436.8546604762],
    [0.00000000309, 0.574955925, 27511.4678735372],
    [0.00000000319, 3.13977654412, 169379.25621117488],
    [0.00000000263, 6.04953863141, 11712.9553182308],
    [0.00000000285, 5.85104532566, 16522.6597160022],
    [0.0000000023, 5.72898960063, 1265.5674786264],
    [0.00000000235, 4.94143074133, 4487.8174062704],
    [0.00000000253, 2.08490293021, 4377.611085051],
    [0.00000000312, 1.61150992635, 11720.0688652316],
    [0.0000000022, 6.00356459702, 20199.094959633],
    [0.00000000214, 0.5239608827, 2221.856634597],
    [0.00000000213, 2.22365237019, 30355.9973197678],
    [0.00000000259, 1.86047749915, 6282.83203250789],
    [0.00000000259, 1.64646341991, 6283.3196674749],
    [0.00000000243, 2.57267015777, 7096.6261339512],
    [0.00000000221, 4.65757923242, 5540.0857894588],
    [0.00000000246, 4.26495076165, 8671.9698704406],
    [0.00000000208, 3.10897679499, 10440.2742926036],
    [0.00000000199, 5.64807046697, 11216.284290324],
    [0.00000000209, 3.71139099761, 419.4846438752],
    [0.00000000207, 1.4954906172, 12562.561271331],
    [0.00000000212, 0.1839197404, 7129.1586847426],
    [0.00000000269, 6.23907991227, 70755.06709173629],
    [0.00000000224, 5.58680388524, 5636.0650166766],
    [0.00000000192, 0.47333599881, 17271.8840075264],
    [0.00000000241, 3.52161359834, 15906.7641266826],
    [0.00000000257, 0.87147328095, 48739.859897083],
    [0.00000000184, 3.83487369725, 9380.9596727172],
    [0.00000000256, 0.7307405889, 224.3447957019],
    [0.0000000025, 2.67103537581, 5934.1514295434],
    [0.00000000185, 1.51386870105, 19800.9459562248],
    [0.00000000189, 2.52919302388, 16062.1845261168],
    [0.00000000175, 3.8409362824, 11614.4332937322],
    [0.00000000175, 6.15313646522, 3744.8273457378],
    [0.0000000024, 0.45238664563, 1.4844727083],
    [0.00000000241, 5.00040455119, 8390.1103575338],
    [0.00000000193, 4.71506547135, 394.6258850592],
    [0.00000000169, 0.80098424793, 742.9900605326],
    [0.00000000189, 4.03411872458, 401.6721217572],
    [0.0000000023, 0.83612842798, 6632.0002704394],
    [0.00000000227, 4.16811397278, 34596.3646546524],
    [0.00000000165, 0.39341190294, 10454.5013866052],
    [0.00000000221, 2.07224292531, 6206.8097787158],
    [0.00000000201, 6.23059857608, 3097.88382272579],
    [0.00000000205, 2.5653347335, 16627.3709153772],
    [0.00000000178, 0.01807925983, 4797.0957289262],
    [0.00000000225, 3.43883654828, 266.6070417218],
    [0.00000000167, 2.40308228314, 5714.253975964],
    [0.00000000167, 1.16660958168, 10344.2950653858],
    [0.00000000172, 3.81893679688, 6332.8328754632],
    [0.00000000172, 5.97118942936, 6233.3188245196],
    [0.00000000214, 2.77237801335, 24492.40611365159],
    [0.00000000159, 2.33166453392, 13198.935439296],
    [0.00000000207, 1.92518585993, 12569.7421286346],
    [0.00000000176, 2.48119329994, 12012.5822971404],
    [0.00000000196, 5.41851032427, 11087.2851259184],
    [0.00000000161, 2.18455666842, 12132.439962106],
    [0.0000000017, 5.35052715864, 6272.0301497275],
    [0.0000000017, 4.4395990676, 6294.1215502553],
    [0.00000000168, 3.97617357428, 17686.7528455664],
    [0.00000000199, 5.15620822027, 33326.5787331742],
    [0.00000000194, 2.13712729333, 28.4491874678],
    [0.00000000144, 2.03929994576, 16737.5772365966],
    [0.00000000148, 1.10385881777, 6851.8977240188],
    [0.00000000146, 4.95201849548, 17370.3609759098],
    [0.00000000143, 5.56441147227, 5618.3198048614],
    [0.0000000014, 5.93460328071, 2008.557539159],
    [0.00000000162, 3.21674523006, 12551.9246059812],
    [0.00000000143, 3.89365374642, 5010.3948243642],
    [0.00000000161, 1.75025798421, 31441.6775697568],
    [0.00000000151, 4.72729575304, 16723.350142595],
    [0.00000000135, 4.79054860554, 12431.0866199474],
    [0.00000000148, 3.93657905776, 28766.924424484],
    [0.00000000146, 6.27087503385, 12701.2167800182],
    [0.00000000137, 1.02989768135, 11.0457002639],
    [0.00000000167, 5.98371371124, 17473.4537501284],
    [0.00000000161, 1.02898808001, 20452.8694122218],
    [0.00000000124, 4.22571513469, 6947.8318951214],
    [0.00000000135, 4.9583891447, 3531.5282502998],
    [0.00000000172, 0.23035302794, 167959.3901140583],
    [0.00000000122, 4.12184077581, 3583.3410306738],
    [0.0000000017, 6.16462338453, 333857.59012677264],
    [0.00000000155, 5.62826239458, 6058.7310542895],
    [0.0000000012, 5.90379805618, 12808.8803039568],
    [0.00000000141, 3.95455987291, 162420.55183479068],
    [0.00000000145, 3.70967890118, 95.9792272178],
    [0.0000000012, 4.26997270152, 12528.124027347],
    [0.00000000119, 5.90934719297, 19247.3765533824],
    [0.00000000117, 5.45034772919, 11610.5519583742],
    [0.00000000163, 1.54432161045, 661.232926781],
    [0.00000000161, 2.28994816795, 52670.0695933026],
    [0.00000000163, 2.78769644779, 9929.4262273458],
    [0.00000000119, 2.71628583938, 12249.7598303262],
    [0.00000000145, 1.17170397718, 6360.7496204194],
    [0.00000000145, 2.33523694188, 6205.4020795634],
    [0.00000000159, 2.61434351364, 228278.1046514866],
    [0.00000000156, 1.0070891232, 4307.5833041354],
    [0.00000000118, 5.95164477875, 6302.74561089119],
    [0.00000000118, 3.83848144749, 6263.4060890916],
    [0.00000000135, 2.80387650268, 19804.8272915828],
    [0.00000000112, 3.88136222265, 16840.67001081519],
    [0.00000000148, 3.55909740786, 28237.2334593894],
    [0.00000000124, 5.50657775921, 10239.5838660108],
    [0.00000000137, 0.97335445483, 6315.6084007828],
    [0.00000000137, 2.53358646423, 6250.5432992],
    [0.00000000111, 0.70362725529, 6339.974224927],
    [0.00000000111, 2.80331366377, 6226.1774750558],
    [0.00000000139, 4.20829691432, 11609.8625440122],
    [0.00000000124, 3.12647421017, 19402.7969528166],
    [0.00000000123, 0.80538262187, 24734.1543965574],
    [0.00000000107, 0.59542543867, 12463.0589257642],
    [0.0000000014, 5.62756230388, 38526.574350872],
    [0.00000000123, 5.71833316259, 6305.8510514422],
    [0.00000000123, 4.07179306365, 6260.3006485406],
    [0.00000000113, 0.38311301542, 2111.6503133776],
    [0.00000000117, 1.1111413126, 24336.0053931492],
    [0.00000000131, 2.04122395494, 18415.51581209739],
    [0.00000000106, 2.18835416515, 12341.8069042809],
    [0.0000000011, 3.31587494701, 6276.44729109139],
    [0.0000000011, 0.19106597205, 6289.70440889141],
    [0.00000000103, 1.18729919186, 6324.6266409762],
    [0.00000000103, 2.3196417272, 6241.5250590066],
    [0.00000000131, 5.93782050272, 5791.4125575326],
    [0.00000000107, 0.14948042255, 83973.83535572988],
    [0.00000000107, 1.18803015964, 84019.8592804939],
    [0.00000000106, 1.7060101934, 12772.33724842],
    [0.00000000143, 6.22488817389, 2069.0068349066],
    [0.00000000143, 5.6322160475, 18772.9614786986],
    [0.00000000115, 5.35511207484, 3641.7345715192],
    [0.00000000121, 3.5343103342, 17996.0311682222],
    [0.00000000126, 5.90533164276, 18822.9292301744],
    [0.00000000115, 3.09464836385, 12570.0838532459],
    [0.00000000119, 0.26217017763, 9814.6041002912],
    [0.00000000138, 2.98838673165, 6209.7787241324],
    [0.00000000138, 0.51855418741, 6356.3729758504],
    [0.000000001, 3.07908951574, 5.5229243074],
    [0.00000000135, 5.28292512146, 18699.6643528396],
    [0.00000000104, 0.57981411648, 12560.6287756754],
    [0.00000000098, 4.00434933508, 5815.11085963699],
    [0.00000000096, 3.47793123567, 22743.4093795164],
    [0.00000000099, 2.68455377979, 78263.70942472259],
    [0.00000000114, 2.18292460802, 6155.057006654],
    [0.00000000114, 1.32401631104, 6411.0946933288],
    [0.00000000093, 0.34809743975, 11190.377900137],
    [0.00000000095, 4.06228552408, 11300.5842213564],
    [0.00000000117, 2.41831042685, 24383.0791084414],
    [0.0000000011, 1.22040625314, 6312.5053585274],
    [0.0000000011, 2.28653466592, 6253.6463414554],
    [0.00000000091, 1.42377843647, 12829.2356233556],
    [0.0000000012, 4.42365311529, 17892.93839400359],
    [0.0000000009, 4.05016333707, 15664.03552270859],
    [0.00000000126, 0.70432668892, 1293.4842235826],
    [0.00000000126, 4.96989709208, 311565.0189210402],
    [0.0000000012, 0.5171737764, 14158.7477136156],
    [0.0000000011, 1.99803947181, 16097.6799502826],
    [0.00000000092, 1.7588610974, 21424.4666443034],
    [0.00000000099, 2.04878528903, 6432.639047126],
    [0.00000000124, 5.19244899173, 178430.0471905317],
    [0.00000000088, 0.12768507477, 15141.390794312],
    [0.00000000089, 5.78577662098, 6751.0408403458],
    [0.00000000096, 1.07414401415, 7349.5713271814],
    [0.00000000094, 1.3065202435, 2699.7348193176],
    [0.00000000087, 1.63535344372, 23141.5583829246],
    [0.00000000103, 2.80666225492, 18202.21671665939],
    [0.00000000099, 5.29408634455, 6313.9899756264],
    [0.00000000099, 4.49603988169, 6252.1617243564],
    [0.0000000009, 1.960452436, 58864.5439181463],
    [0.00000000113, 3.06789441452, 10557.5941608238],
    [0.00000000098, 1.66301652528, 6126.675129489],
    [0.00000000098, 1.84392439378, 6439.4765704938],
    [0.00000000086, 6.05385675766, 23123.74586080659],
    [0.00000000094, 5.54106526599, 23539.7073863328],
    [0.00000000118, 2.16762826283, 13951.7132749339],
    [0.00000000117, 2.5384568721, 89569.990119545],
    [0.00000000083, 4.71523084157, 8858.3149443206],
    [0.00000000101, 4.94270501848, 18429.742906099],
    [0.00000000088, 2.19663281211, 17053.96910625319],
    [0.00000000113, 0.47970289838, 12985.636343858],
    [0.00000000082, 4.90614256431, 5483.254724826],
    [0.00000000095, 0.81797133475, 11925.2740926006],
    [0.00000000084, 2.66665772953, 6379.0550772092],
    [0.00000000084, 0.84028318953, 6187.0966227736],
    [0.00000000093, 3.10680657507, 35371.8872659764],
    [0.00000000105, 1.20399152892, 6434.9731310766],
    [0.00000000105, 2.30294939014, 6131.1785689062],
    [0.00000000114, 2.50001433093, 8258.5683958474],
    [0.00000000084, 3.8219641331, 32217.2001810808],
    [0.00000000082, 5.40278723857, 3958.1264411758],
    [0.00000000102, 1.32703960779, 5767.6119788984],
    [0.00000000102, 2.17990131127, 6798.5397210844],
    [0.00000000092, 6.07396273786, 18216.443810661],
    [0.00000000112, 3.91825505548, 12188.778092067],
    [0.00000000086, 4.1843948684, 16193.65917750039],
    [0.0000000008, 2.01988251452, 24080.03501677719],
    [0.00000000093, 4.66163367881, 23937.856389741],
    [0.00000000088, 4.57496913724, 1573.8204240988],
    [0.00000000092, 2.79375473262, 101426.20877096949],
    [0.0000000011, 5.08243853758, 78423.70451667879],
    [0.00000000087, 3.89286413327, 1580.8666607968],
    [0.0000000008, 1.70826898567, 6485.3292451655],
    [0.0000000008, 1.79867193339, 6080.8224548173],
    [0.00000000079, 6.1611473858, 40796.33892267419],
    [0.00000000079, 2.96735408932, 36109.38220466459],
    [0.00000000088, 5.58306387433, 16943.7627850338],
    [0.00000000093, 0.22422436515, 283.8593188652],
    [0.00000000088, 1.678216318, 12537.702512515],
    [0.00000000079, 4.76362160922, 41194.4879260824],
    [0.00000000081, 5.19149105668, 3956.5080160194],
    [0.00000000103, 3.71008010926, 56600.2792895222],
    [0.00000000079, 2.9369730137, 5621.8429232104],
    [0.00000000096, 0.4141822589, 5888.4499649322],
    [0.00000000096, 3.09275866016, 6677.7017350506],
    [0.00000000074, 4.41044639229, 6304.4114904584],
    [0.00000000074, 5.37967983395, 6261.7402095244],
    [0.00000000073, 1.05049706961, 6695.4469468658],
    [0.00000000073, 2.45644384945, 5870.704753117],
    [0.00000000073, 1.61765616896, 16207.886271502],
    [0.00000000085, 2.08161902252, 12850.011018848],
    [0.00000000072, 5.03595593677, 6312.8972881402],
    [0.00000000072, 4.75417028947, 6253.25441184259],
    [0.000000001, 3.80714752393, 5316.1049725558],
    [0.00000000085, 1.33904345426, 12282.2923811176],
    [0.00000000077, 5.07586430304, 22345.2603761082],
    [0.00000000075, 0.39510451579, 24422.3703514073],
    [0.00000000076, 0.41146256256, 63658.8777508376],
    [0.00000000087, 2.06336091493, 18106.2374894416],
    [0.0000000007, 0.44640955505, 6442.0193677746],
    [0.0000000007, 3.06053136401, 6124.1323322082],
    [0.00000000074, 5.61945589711, 15265.8865193004],
    [0.00000000078, 3.38283383527, 23550.34405168259],
    [0.00000000077, 5.00656029204, 5237.9210138038],
    [0.00000000075, 3.64547243832, 27832.0382192832],
    [0.00000000082, 3.91623659935, 6774.7391424502],
    [0.00000000067, 4.88284279928, 7082.8969751568],
    [0.00000000067, 3.24232940659, 6171.8892077038],
    [0.00000000067, 0.26461151247, 6394.262492279],
    [0.0000000008, 3.79677325613, 22380.755800274],
    [0.0000000007, 0.47599032576, 6175.4123260528],
    [0.0000000007, 3.0309505933, 6390.73937393],
    [0.00000000077, 0.29137018417, 9924.8104215106],
    [0.00000000091, 0.90446873976, 6652.7756659318],
    [0.00000000091, 2.6024721793, 5913.376034051],
    [0.00000000067, 4.84479908786, 6300.8883721094],
    [0.00000000067, 4.94532713838, 6265.2633278734],
    [0.00000000088, 3.59122542798, 10660.6869350424],
    [0.00000000066, 3.01430181986, 5959.570433334],
    [0.0000000008, 5.49178527606, 23646.32327890039],
    [0.00000000068, 2.07232411643, 4897.1805736552],
    [0.00000000069, 0.56996801147, 6944.3087767724],
    [0.00000000073, 2.96334792367, 6195.76764545159],
    [0.00000000073, 0.54359299539, 6370.3840545312],
    [0.00000000071, 3.5716697893, 17363.24742890899],
    [0.00000000074, 1.56614709067, 27043.5028831828],
    [0.00000000066, 2.38194509538, 6251.1035441746],
    [0.00000000066, 1.12499582368, 6315.0481558082],
    [0.00000000064, 3.50738755186, 323.5054166574],
    [0.00000000078, 0.83740696355, 42456.7840470916],
    [0.00000000063, 2.70916268945, 11823.1616394502],
    [0.00000000064, 4.80330562067, 28774.0379714848],
    [0.00000000079, 5.66337403718, 24065.80792277559],
    [0.00000000072, 2.11096843463, 18100.00325845],
    [0.00000000066, 1.21053452412, 17576.546524347],
    [0.00000000072, 0.02703779211, 245707.4661043443],
    [0.00000000068, 0.52464381855, 18003.144715223],
    [0.00000000068, 1.33733194362, 28759.81087748319],
    [0.00000000062, 2.2504671782, 3855.0336669572],
    [0.0000000006, 5.83008017266, 18606.4989460002],
    [0.00000000079, 2.49476757272, 22476.73502749179],
    [0.00000000073, 4.61251602377, 23440.1377304632],
    [0.0000000006, 1.65871121739, 13088.7291180766],
    [0.00000000078, 2.99014426818, 12564.6672272745],
    [0.0000000006, 2.90135289748, 7548.6433286178],
    [0.00000000073, 4.73963217435, 735.8765135318],
    [0.00000000059, 2.43330626408, 5113.4875985828],
    [0.00000000075, 2.85043788676, 18624.8827542723],
    [0.00000000069, 4.25329739931, 167993.69463622378],
    [0.00000000059, 5.1362804181, 41990.7859328988],
    [0.00000000081, 5.98297918907, 7250.046727427],
    [0.00000000059, 2.39193379192, 6289.1417656212],
    [0.00000000059, 1.11500712714, 6277.0099343616],
    [0.00000000072, 4.87534601803, 8982.810669309],
    [0.00000000057, 3.30911091342, 792.7748884674],
    [0.00000000057, 1.61290511224, 10027.9031957292],
    [0.00000000072, 5.73653948228, 4598.0237274898],
    [0.0000000006, 0.63449806943, 647.0108333148],
    [0.00000000066, 0.80721495515, 5220.1708014532],
    [0.00000000056, 5.24002840662, 35050.00027447539],
    [0.00000000077, 2.14165124499, 46386.9937433112],
    [0.00000000068, 1.14499338723, 3166.4164377316],
    [0.00000000056, 0.3991774857, 6339.8791121612],
    [0.00000000056, 3.10776343336, 6226.2725878216],
    [0.00000000056, 0.95649088929, 12303.06777661],
    [0.00000000057, 1.98721525004, 6702.000248892],
    [0.00000000057, 1.51972566902, 5864.1514510908],
    [0.00000000069, 0.33788710387, 23536.11695768099],
    [0.00000000059, 1.81421782103, 67589.08744705719],
    [0.00000000076, 0.77801824814, 23226.8386350252],
    [0.00000000059, 1.03968301691, 15.252471185],
    [0.00000000073, 4.4386805611, 30348.883772767],
    [0.00000000054, 4.96201305869, 36147.4098773004],
    [0.0000000007, 6.2781822466, 12299.544658261],
    [0.0000000006, 5.08461088458, 12171.5258149236],
    [0.00000000074, 1.19928905734, 3684.3780499902],
    [0.00000000058, 1.58539308271, 6716.7875878682],
    [0.00000000061, 3.25163800829, 27707.5424942948],
    [0.00000000059, 5.76308524321, 12164.4795782256],
    [0.0000000007, 0.07217173698, 16833.55646381439],
    [0.00000000063, 2.16224668422, 5227.6260730653],
    [0.00000000063, 5.23287718161, 5219.7617665391],
    [0.00000000056, 2.45377587379, 3178.1457905676],
    [0.00000000072, 2.62702736253, 4583.7966334882],
    [0.00000000052, 0.96546586882, 3627.5074775176],
    [0.00000000052, 0.20415505351, 6155.1243169568],
    [0.00000000052, 3.30278586555, 6411.027383026],
    [0.0000000006, 0.48342399631, 5244.049239201],
    [0.00000000058, 2.72226132172, 30775.481963643],
    [0.00000000052, 5.80291300969, 30639.856638633],
    [0.00000000053, 5.75258856716, 37724.7534197482],
    [0.00000000062, 2.89766241568, 6908.7460423038],
    [0.00000000062, 0.60927850338, 5657.405657679],
    [0.0000000005, 3.11011154958, 2575.2390943292],
    [0.00000000054, 1.15676928987, 18208.349942592],
    [0.0000000005, 3.12376167242, 5881.4037282342],
    [0.0000000005, 0.38317924664, 6684.7479717486],
    [0.00000000068, 4.61950794623, 96677.8988630422],
    [0.00000000054, 0.77163765121, 41654.9631159678],
    [0.00000000066, 5.13003693613, 60530.4889857418],
    [0.0000000005, 1.64593222191, 43738.8023459658],
    [0.00000000048, 5.44674337925, 25685.872802808],
    [0.00000000059, 2.71376008731, 3981.490034082],
    [0.00000000058, 0.74658643142, 14169.7935622304],
    [0.00000000051, 1.43461659855, 7668.9711263276],
    [0.00000000048, 3.23576011756, 3646.3503773544],
    [0.00000000054, 4.50803792908, 39302.096962196],
    [0.00000000057, 2.62704971421, 799.8211251654],
    [0.00000000061, 3.28745263972, 44034.1275895394],
    [0.00000000049, 2.15365169571, 96562.99901809469],
    [0.0000000005, 3.60626874009, 17583.6600713478],
    [0.00000000051, 1.16028405425, 38650.173506199],
    [0.00000000053, 1.90122336672, 11080.1715789176],
    [0.00000000059, 0.68886289824, 62883.3551395136],
    [0.00000000046, 0.83996053249, 25287.7237993998],
    [0.00000000049, 3.59486880927, 5490.300961524],
    [0.00000000058, 5.95314247069, 6489.776587288],
    [0.00000000058, 3.83698375555, 6076.3751126948],
    [0.00000000047, 4.43378504018, 170.6728706192],
    [0.00000000045, 5.81363953764, 33318.8160624582],
    [0.00000000046, 3.19651245272, 4480.7038592696],
    [0.0000000006, 3.92066214096, 28313.288804661],
    [0.00000000061, 3.5351068144, 491.6632924588],
    [0.00000000051, 6.00904914233, 3428.4354760812],
    [0.0000000006, 3.5128391181, 50317.2034395308],
    [0.00000000054, 1.22650408797, 6006.330078127],
    [0.00000000054, 2.28043683109, 6559.8216218558],
    [0.00000000052, 3.85271761797, 244287.60000722768],
    [0.00000000046, 3.84965479184, 4384.7246320518],
    [0.00000000045, 0.29195078507, 44136.951349374],
    [0.00000000044, 2.71274650311, 2301.58581590939],
    [0.00000000048, 4.64164514773, 35579.69123957],
    [0.00000000051, 4.9188765107, 18326.65013188039],
    [0.00000000046, 3.15339406184, 16703.062133499],
    [0.00000000048, 2.39477993061, 5209.4668258006],
    [0.00000000046, 2.47672465258, 12555.1059997189],
    [0.00000000052, 4.64446990453, 5992.1029841254],
    [0.00000000052, 5.14565632171, 6574.0487158574],
    [0.00000000044, 3.80836113401, 69941.95360082899],
    [0.0000000005, 3.54529295551, 22030.2129546696],
    [0.00000000043, 1.20775471242, 20894.77567920879],
    [0.00000000044, 2.61939991177, 533.2140834436],
    [0.00000000045, 4.65113002963, 46360.6954235114],
    [0.00000000047, 2.17023181784, 45585.1728121874],
    [0.00000000043, 1.54528183996, 8401.8397103698],
    [0.00000000054, 3.62371389676, 24279.10701821359],
    [0.00000000042, 5.13054174413, 27433.88921587499],
    [0.00000000042, 1.32093818083, 21548.9623692918],
    [0.00000000045, 3.22031193914, 71519.2971432768],
    [0.00000000043, 2.75467576214, 27278.4688164408],
    [0.00000000042, 2.68353478578, 28230.18722269139],
    [0.00000000051, 2.95623880108, 7761.9424240558],
    [0.00000000041, 5.14394847571, 3735.238311759],
    [0.00000000042, 3.66392136716, 26084.0218062162],
    [0.00000000047, 6.0333863099, 4708.2300487092],
    [0.00000000056, 5.6744210971, 88041.956859279],
    [0.00000000056, 5.36734540218, 28663.8316502654],
    [0.0000000004, 1.07842393153, 28628.3362260996],
    [0.00000000047, 5.61045374376, 316428.22867391503],
    [0.00000000056, 1.28041118541, 83659.27687239899],
    [0.00000000039, 0.71682305362, 34570.0663348526],
    [0.00000000056, 1.60418809786, 82534.40362061159],
    [0.00000000052, 1.15000260118, 40398.189919266],
    [0.00000000048, 0.93182108526, 12662.1309272006],
    [0.00000000041, 4.95215656542, 37057.5774925662],
    [0.00000000052, 2.84085536047, 12571.6746242902],
    [0.00000000043, 3.12714109961, 7322.1024607818],
    [0.00000000041, 1.98689255259, 664.75604513],
    [0.00000000043, 4.45441019609, 19004.6479494084],
    [0.00000000044, 3.63007864944, 6140.8972229552],
    [0.00000000044, 6.1600475768, 6425.2544770276],
    [0.00000000044, 3.57757676616, 49515.382508407],
    [0.00000000039, 5.09443272912, 22594.05489571199],
    [0.00000000055, 5.97876206707, 80181.53746683979],
    [0.00000000054, 3.12084664124, 6006.04085625],
    [0.00000000054, 0.38609427782, 6560.1108437328],
    [0.00000000045, 0.83262497188, 142861.39123625818],
    [0.00000000047, 5.83395711112, 24499.5196606524],
    [0.00000000043, 6.07854396898, 7026.065910524],
    [0.00000000047, 2.57216284949, 11919.140866668],
    [0.00000000047, 2.93748065634, 24485.29256665079],
    [0.0000000005, 3.13873979564, 92747.68916682259],
    [0.00000000043, 4.24359473122, 6359.341921267],
    [0.00000000049, 2.11824959319, 66813.5648357332],
    [0.00000000042, 3.13003412642, 6231.79551212899],
    [0.00000000042, 0.37690679264, 6334.35618785381],
    [0.00000000052, 1.96232281613, 11904.9187732018],
    [0.0000000004, 6.22187276386, 7075.8507384588],
    [0.0000000004, 4.78395267597, 7122.0451377418],
    [0.0000000004, 5.00617355027, 5444.106562241],
    [0.00000000038, 0.67444569484, 44933.2493561904],
    [0.00000000037, 4.80355711691, 6850.7944877218],
    [0.00000000037, 4.98656910933, 5715.357212261],
    [0.0000000005, 0.35643037555, 21947.1113727],
    [0.00000000039, 2.97136332005, 21150.8133658836],
    [0.00000000042, 2.21951419227, 6328.217069628],
    [0.00000000042, 1.28742672679, 6237.9346303548],
    [0.00000000051, 4.4251068279, 60284.4100152629],
    [0.0000000004, 5.21447072458, 3215.1363806432],
    [0.00000000039, 3.85122558089, 30774.5016425748],
    [0.00000000046, 3.45581538922, 12146.6670561076],
    [0.0000000005, 0.05709243771, 84334.4177638248],
];

const Y1: &[Term] = &[
    [0.00093046324, 0.0, 0.0],
    [0.00051506609, 4.43180499286, 12566.1516999828],
    [0.000012908, 4.3886054854, 18849.2275499742],
    [0.0000046455, 5.82729912952, 6283.0758499914],
    [0.00000212689, 0.16300556918, 6279.5527316424],
    [0.00000212533, 3.34400595407, 6286.5989683404],
    [0.00000062345, 5.07377354827, 4705.7323075436],
    [0.00000059794, 2.24100907272, 6256.7775301916],
    [0.00000059441, 1.26619990626, 6309.3741697912],
    [0.00000048987, 3.64166577835, 775.522611324],
    [0.00000042746, 5.15177425824, 1059.3819301892],
    [0.00000046642, 4.715752158, 7860.4193924392],
    [0.00000037274, 0.66041323804, 5753.3848848968],
    [0.00000035625, 6.15462846966, 5884.9268465832],
    [0.00000035373, 2.90052012152, 6812.766815086],
    [0.00000032157, 3.62669702015, 6681.2248533996],
    [0.00000028763, 4.34539355621, 25132.3033999656],
    [0.00000028447, 5.86215103214, 6127.6554505572],
    [0.00000027502, 3.92641632542, 6438.4962494256],
    [0.0000002483, 1.35190115953, 5486.777843175],
    [0.00000020618, 2.14772396647, 7079.3738568078],
    [0.00000019531, 1.29958310594, 5507.5532386674],
    [0.00000018447, 6.17330532651, 11790.6290886588],
    [0.0000001652, 4.63328039489, 11506.7697697936],
    [0.00000016754, 2.24862220282, 7058.5984613154],
    [0.0000001456, 4.40425761361, 6290.1893969922],
    [0.00000014426, 5.39226330857, 6275.9623029906],
    [0.00000014186, 6.18547219419, 796.2980068164],
    [0.00000012666, 5.73231393752, 4694.0029547076],
    [0.00000012966, 5.10338935824, 7.1135470008],
    [0.000000101, 1.72464513593, 3738.761430108],
    [0.00000009427, 3.08115743044, 6069.7767545534],
    [0.00000010425, 2.69531177468, 6282.0955289232],
    [0.00000010425, 0.81162914438, 6284.0561710596],
    [0.00000009576, 0.32459396888, 4136.9104335162],
    [0.00000009043, 0.43888880403, 6496.3749454294],
    [0.00000008545, 4.77137497641, 1194.4470102246],
    [0.00000008199, 5.96838316358, 1589.0728952838],
    [0.00000006291, 3.18312019173, 8429.2412664666],
    [0.00000006133, 1.78033290355, 8827.3902698748],
    [0.00000005524, 3.79842135217, 4933.2084403326],
    [0.00000007316, 5.20404355405, 4535.0594369244],
    [0.00000005146, 3.57146870511, 11769.8536931664],
    [0.00000006461, 2.67840586109, 5088.6288397668],
    [0.0000000527, 0.94095218349, 3154.6870848956],
    [0.00000004829, 5.328765385, 6040.3472460174],
    [0.00000004985, 3.05697984231, 12569.6748183318],
    [0.00000004709, 2.39292099451, 5331.3574437408],
    [0.00000004601, 4.4529653271, 6525.8044539654],
    [0.00000005607, 0.98720797401, 5729.506447149],
    [0.00000004081, 5.94191743597, 7632.9432596502],
    [0.00000004394, 4.7594818484, 12559.038152982],
    [0.00000005053, 4.55162942081, 8031.0922630584],
    [0.00000005077, 0.73549620962, 7477.522860216],
    [0.00000003779, 1.07385171253, 7234.794256242],
    [0.00000004974, 2.50029147401, 6836.6452528338],
    [0.00000003614, 2.52455299148, 3930.2096962196],
    [0.00000003482, 3.82652198801, 10977.078804699],
    [0.00000003576, 5.30219799481, 4164.311989613],
    [0.00000003376, 5.00213145251, 11371.7046897582],
    [0.0000000429, 3.36736739298, 1592.5960136328],
    [0.00000003406, 0.83525752781, 3128.3887650958],
    [0.00000003124, 3.17143982984, 7084.8967811152],
    [0.00000002752, 3.67389621489, 7342.4577801806],
    [0.00000002778, 0.26817898615, 1748.016413067],
    [0.00000002694, 4.70989138148, 529.6909650946],
    [0.0000000282, 0.2314691432, 5223.6939198022],
    [0.00000003334, 3.48823993118, 801.8209311238],
    [0.00000003328, 5.83812544995, 155.4203994342],
    [0.00000003008, 0.67203387304, 8635.9420037632],
    [0.00000002348, 5.19665664165, 2146.1654164752],
    [0.00000002307, 2.98930142346, 17260.1546546904],
    [0.00000002778, 6.17392405934, 5481.2549188676],
    [0.00000002046, 1.96605971472, 1990.745017041],
    [0.0000000267, 1.00151747879, 26.2983197998],
    [0.00000002, 3.03124266219, 951.7184062506],
    [0.00000002162, 0.33268106563, 536.8045120954],
    [0.0000000183, 4.43806423544, 553.5694028424],
    [0.00000001762, 3.84931185617, 4690.4798363586],
    [0.00000002033, 0.80949219978, 522.5774180938],
    [0.0000000243, 1.64090263419, 1349.8674096588],
    [0.00000001902, 2.66567222573, 9437.762934887],
    [0.0000000194, 3.91085273629, 5216.5803728014],
    [0.00000001708, 5.00417878382, 10988.808157535],
    [0.00000001762, 2.39542835845, 398.1490034082],
    [0.0000000179, 3.48655562486, 5230.807466803],
    [0.00000001524, 5.81370227284, 426.598190876],
    [0.00000001555, 2.09924417685, 13095.8426650774],
    [0.00000001779, 0.23737949225, 12562.6285816338],
    [0.0000000145, 5.7120136826, 6262.7205305926],
    [0.0000000145, 4.07811254364, 6303.4311693902],
    [0.00000001768, 0.08826500577, 10973.55568635],
    [0.00000001373, 5.60523185373, 7875.6718636242],
    [0.00000001428, 3.29442777483, 12721.572099417],
    [0.00000001247, 0.29212365805, 2118.7638603784],
    [0.0000000123, 2.53131850803, 18319.5365848796],
    [0.00000001141, 1.92147452671, 1066.49547719],
    [0.0000000114, 1.21410806683, 2942.4634232916],
    [0.00000001045, 2.1753572128, 242.728603974],
    [0.00000000973, 4.95437649984, 639.897286314],
    [0.00000000969, 1.29405045734, 5643.1785636774],
    [0.00000001064, 4.40566643488, 15720.8387848784],
    [0.00000000962, 0.55758587779, 2388.8940204492],
    [0.00000000943, 4.22062437022, 20426.571092422],
    [0.00000000869, 5.80860615243, 16496.3613962024],
    [0.00000000874, 1.43036958888, 10575.4066829418],
    [0.00000001088, 5.77656856686, 5760.4984318976],
    [0.00000000889, 4.77820137734, 6288.5987742988],
    [0.00000000889, 5.01192484889, 6277.552925684],
    [0.00000001018, 2.66299766067, 12539.853380183],
    [0.00000001017, 4.02093017183, 6805.6532680852],
    [0.00000000794, 3.7932907994, 14314.1681130498],
    [0.00000000795, 3.39951828424, 6279.7894925736],
    [0.00000000795, 0.10742263482, 6286.3622074092],
    [0.00000000759, 4.98301749094, 1577.3435424478],
    [0.00000000757, 3.81754073272, 5856.4776591154],
    [0.000000008, 3.18366218591, 12029.3471878874],
    [0.00000000716, 2.28687269516, 9623.6882766912],
    [0.00000000698, 4.94363229969, 6148.010769956],
    [0.00000000907, 0.70119368826, 13367.9726311066],
    [0.00000000672, 3.99153941403, 12964.300703391],
    [0.00000000678, 4.84647216304, 6418.1409300268],
    [0.00000000671, 6.00179402654, 6709.6740408674],
    [0.00000000657, 1.80163596347, 13119.72110282519],
    [0.00000000662, 4.0403110364, 11015.1064773348],
    [0.00000000744, 2.6874116078, 12043.574281889],
    [0.00000000673, 2.45322928062, 14712.317116458],
    [0.00000000696, 2.53877129238, 16730.4636895958],
    [0.00000000671, 0.40543909773, 13517.8701062334],
    [0.00000000604, 5.39462125376, 14143.4952424306],
    [0.00000000754, 5.24655445271, 13916.0191096416],
    [0.00000000629, 3.42493725594, 4686.8894077068],
    [0.0000000061, 5.19955844918, 6819.8803620868],
    [0.00000000667, 4.8715137291, 3634.6210245184],
    [0.00000000609, 4.57544043999, 5746.271337896],
    [0.0000000062, 4.30310535016, 31415.379249957],
    [0.00000000553, 0.78994516254, 6306.9542877392],
    [0.00000000553, 2.71699575652, 6259.1974122436],
    [0.00000000524, 3.96543945899, 12139.5535091068],
    [0.00000000514, 3.87793148429, 4701.1165017084],
    [0.00000000553, 4.81568395217, 12036.4607348882],
    [0.00000000495, 2.00987395637, 13362.4497067992],
    [0.00000000562, 4.76145666018, 4292.3308329504],
    [0.00000000481, 2.57118063835, 6286.9571853494],
    [0.00000000481, 0.93576028071, 6279.1945146334],
    [0.00000000635, 3.19879108676, 84334.66158130829],
    [0.00000000445, 1.68959289911, 11499.6562227928],
    [0.00000000596, 1.08038043695, 10447.3878396044],
    [0.00000000452, 3.98330238308, 12573.2652469836],
    [0.00000000499, 5.79985861523, 12410.7313005486],
    [0.0000000044, 0.58121786395, 24072.9214697764],
    [0.00000000575, 1.39410252291, 12592.4500197826],
    [0.00000000404, 0.56451183179, 5863.5912061162],
    [0.00000000398, 4.20035189119, 8273.8208670324],
    [0.00000000418, 2.76069368004, 10177.2576795336],
    [0.00000000379, 3.05384870302, 6386.16862421],
    [0.00000000379, 0.45309221604, 6179.9830757728],
    [0.00000000377, 4.33269290931, 7872.1487452752],
    [0.00000000419, 4.05140116867, 5327.4761083828],
    [0.00000000383, 5.11659434377, 6319.1037166688],
    [0.00000000383, 4.67353188247, 6247.04798331399],
    [0.00000000457, 0.88573283839, 6489.2613984286],
    [0.00000000457, 2.62120808067, 6076.8903015542],
    [0.00000000378, 5.80861101902, 7238.6755916],
    [0.00000000344, 4.99907349425, 18451.07854656599],
    [0.00000000334, 0.5621591799, 18073.7049386502],
    [0.00000000453, 5.43513758472, 2787.0430238574],
    [0.00000000364, 0.67991079022, 6321.1035226272],
    [0.00000000364, 2.82703012884, 6245.0481773556],
    [0.00000000342, 4.52940007807, 6303.8512454838],
    [0.00000000342, 5.26072614817, 6262.300454499],
    [0.00000000319, 4.83173153249, 11926.2544136688],
    [0.00000000316, 1.1736206554, 77713.7714681205],
    [0.00000000318, 6.03589239585, 6311.5250374592],
    [0.00000000318, 3.75423383039, 6254.6266625236],
    [0.00000000315, 1.09950918957, 12323.4230960088],
    [0.0000000031, 4.02477182017, 10213.285546211],
    [0.00000000311, 5.94074472453, 2352.8661537718],
    [0.00000000304, 0.43890915612, 12779.4507954208],
    [0.00000000343, 1.36470897271, 6267.82337880639],
    [0.00000000343, 2.14223194635, 6298.3283211764],
    [0.00000000398, 4.83558508405, 1551.045222648],
    [0.00000000358, 2.52713972155, 1052.2683831884],
    [0.000000003, 0.20527323254, 90279.92316810328],
    [0.00000000297, 2.07974536467, 5429.8794682394],
    [0.00000000332, 2.13791551771, 213.299095438],
    [0.00000000362, 1.16895887442, 10021.8372800994],
    [0.00000000334, 1.16416729842, 17782.7320727842],
    [0.00000000295, 2.48770580169, 6702.5604938666],
    [0.00000000321, 0.66776723307, 17796.9591667858],
    [0.00000000369, 4.7823159787, 4732.0306273434],
    [0.00000000288, 3.7305553274, 220.4126424388],
    [0.00000000263, 2.60909847321, 955.5997416086],
    [0.00000000305, 0.57265325631, 5642.1982426092],
    [0.00000000258, 4.38103579313, 206.1855484372],
    [0.00000000287, 0.31572653335, 9917.6968745098],
    [0.00000000261, 1.9378221626, 16200.7727245012],
    [0.00000000234, 2.50307529331, 1596.1864422846],
    [0.00000000282, 2.93181184874, 13341.6743113068],
    [0.00000000262, 5.15409122759, 14945.3161735544],
    [0.00000000276, 0.59107321564, 12168.0026965746],
    [0.00000000217, 2.74597813026, 2544.3144198834],
    [0.00000000259, 5.53112324599, 3894.1818295422],
    [0.00000000216, 4.02991604351, 3185.1920272656],
    [0.0000000025, 3.04516511604, 6923.9534573736],
    [0.00000000193, 0.7877975282, 640.8776073822],
    [0.00000000203, 2.8241719579, 6062.6632075526],
    [0.00000000203, 0.68276896116, 6503.4884924302],
    [0.00000000188, 4.83298725434, 18209.33026366019],
    [0.00000000184, 2.638755168, 12566.2190102856],
    [0.00000000213, 4.09959554852, 9779.1086761254],
    [0.0000000018, 4.19738483213, 853.196381752],
    [0.00000000248, 5.62050900898, 17789.845619785],
    [0.00000000187, 3.02088056063, 6276.02961329339],
    [0.00000000187, 0.48606035843, 6290.1220866894],
    [0.00000000168, 6.02158735674, 110.2063212194],
    [0.00000000184, 3.08285813784, 12566.08438968],
    [0.0000000023, 0.6669456243, 12567.132021051],
    [0.00000000166, 5.9072517295, 433.7117378768],
    [0.00000000184, 1.80970202711, 6037.244203762],
    [0.00000000159, 0.31775301914, 3496.032826134],
    [0.00000000179, 1.27622455391, 3.523118349],
    [0.00000000156, 0.77329171048, 2648.454825473],
    [0.00000000182, 0.19927362554, 5849.3641121146],
    [0.00000000175, 1.69691956469, 6528.9074962208],
    [0.00000000154, 5.68366565747, 6112.4029793722],
    [0.00000000154, 4.10646056877, 6453.7487206106],
    [0.00000000162, 0.40509792796, 18875.525869774],
    [0.00000000163, 2.96167567065, 12352.8526045448],
    [0.00000000146, 2.48714617179, 149.5631971346],
    [0.00000000143, 0.06272029982, 19651.048481098],
    [0.00000000144, 2.19098385924, 18635.9284545362],
    [0.00000000141, 5.6357474907, 10969.9652576982],
    [0.00000000146, 0.42084370397, 13760.5987102074],
    [0.00000000161, 6.06631099179, 8662.240323563],
    [0.00000000142, 2.91677439721, 4157.1984426122],
    [0.00000000133, 4.73063338736, 18139.2945014159],
    [0.0000000015, 4.37920284921, 3340.6124266998],
    [0.00000000125, 0.78764990758, 20.7753954924],
    [0.00000000123, 4.97498024339, 6172.869528772],
    [0.00000000123, 4.81514598285, 6393.2821712108],
    [0.00000000135, 4.59213390099, 10984.1923516998],
    [0.00000000117, 2.90632080371, 18852.7506683232],
    [0.00000000118, 5.67650820416, 17256.6315363414],
    [0.00000000147, 4.60612631701, 17654.7805397496],
    [0.00000000113, 3.90726609167, 65147.6197681377],
    [0.00000000123, 2.85759760823, 12565.1713789146],
    [0.00000000107, 5.46942612515, 9380.9596727172],
    [0.00000000119, 0.71211331875, 10419.9862835076],
    [0.00000000105, 5.13254223053, 632.7837393132],
    [0.00000000103, 4.9594133027, 6271.3464971554],
    [0.00000000103, 4.83071292354, 6294.8052028274],
    [0.00000000102, 5.99360230997, 4804.209275927],
    [0.00000000114, 3.78885344182, 4171.4255366138],
    [0.00000000113, 4.29988480427, 23013.5395395872],
    [0.00000000112, 0.61034141917, 17253.04110768959],
    [0.00000000111, 2.09128320599, 1581.959348283],
    [0.00000000113, 0.9798380835, 16858.4825329332],
    [0.00000000102, 4.09962394648, 6549.6828917132],
    [0.00000000102, 5.69050227976, 6016.4688082696],
    [0.00000000106, 0.87687085688, 23543.23050468179],
    [0.00000000121, 4.76575782873, 13625.533630172],
    [0.0000000009, 2.11774047359, 76.2660712756],
    [0.00000000088, 1.18967345782, 17298.1823273262],
    [0.00000000087, 1.12941525302, 17267.26820169119],
    [0.00000000092, 1.84158032509, 22805.7355659936],
    [0.00000000086, 4.36870119289, 12808.8803039568],
    [0.00000000111, 0.85102422912, 11513.8833167944],
    [0.00000000095, 6.0559745773, 12345.739057544],
    [0.00000000106, 3.57199937061, 11216.284290324],
    [0.00000000087, 1.36534411656, 8982.810669309],
    [0.00000000095, 0.9296630348, 12012.5822971404],
    [0.00000000081, 2.27691876526, 11614.4332937322],
    [0.00000000084, 5.85994160066, 6255.6742938946],
    [0.00000000084, 3.93018462558, 6310.4774060882],
    [0.0000000008, 5.05950625443, 6922.9731363054],
    [0.00000000085, 1.08198764342, 5636.0650166766],
    [0.00000000084, 4.64040201203, 10440.2742926036],
    [0.00000000089, 6.25985265406, 16723.350142595],
    [0.0000000008, 2.6262247457, 3583.3410306738],
    [0.00000000091, 5.59316682916, 10818.1352869158],
    [0.00000000091, 1.4361272766, 15671.0817594066],
    [0.00000000077, 4.132298013, 6993.0088985497],
    [0.00000000076, 2.85409687552, 11925.2740926006],
    [0.00000000096, 1.47205677028, 3097.88382272579],
    [0.00000000104, 0.70746530546, 5650.2921106782],
    [0.00000000086, 5.52511956951, 12359.9661515456],
    [0.0000000008, 6.03205499783, 13521.7514415914],
    [0.0000000009, 4.45214765055, 6195.76764545159],
    [0.0000000009, 5.33797857569, 6370.3840545312],
    [0.00000000082, 4.91006846138, 18842.11400297339],
    [0.00000000073, 4.52976823745, 949.1756089698],
    [0.00000000083, 3.74911363362, 18415.51581209739],
    [0.00000000102, 4.43384315891, 3104.9300594238],
    [0.00000000074, 5.90055438198, 5120.6011455836],
    [0.00000000093, 2.53140640111, 16460.33352952499],
    [0.00000000084, 5.92514029201, 2379.1644735716],
    [0.00000000075, 0.05752343047, 30355.9973197678],
    [0.00000000076, 3.26399401386, 18429.742906099],
    [0.00000000067, 4.00530001957, 16062.1845261168],
    [0.00000000066, 4.8163406413, 10454.5013866052],
    [0.00000000087, 3.52675041577, 3903.9113764198],
    [0.00000000078, 2.74560762552, 8671.9698704406],
    [0.00000000063, 5.70772167485, 24356.7807886416],
    [0.00000000073, 6.08379700055, 9388.0059094152],
    [0.0000000006, 1.94470153573, 34570.0663348526],
    [0.00000000057, 2.89018663881, 149854.4001348079],
    [0.00000000056, 3.76314176838, 12455.9453787634],
    [0.00000000055, 1.32127703933, 23539.7073863328],
    [0.00000000055, 5.60680941684, 15664.03552270859],
    [0.00000000056, 0.60887110989, 11764.330768859],
    [0.00000000061, 4.86427999867, 28237.2334593894],
    [0.00000000065, 4.2996552855, 7335.3442331798],
    [0.00000000067, 4.20742811531, 11933.3679606696],
    [0.00000000072, 4.30216792995, 6510.5519827804],
    [0.00000000072, 5.48795829629, 6055.5997172024],
    [0.00000000053, 5.64466034451, 17996.0311682222],
    [0.00000000071, 4.94322519248, 12545.3763044904],
    [0.00000000061, 3.80625548858, 6253.6463414554],
    [0.00000000061, 5.98387073766, 6312.5053585274],
    [0.00000000052, 1.83796108842, 5326.7866940208],
    [0.00000000066, 0.7963383466, 14919.0178537546],
    [0.00000000053, 2.81005325604, 2699.7348193176],
    [0.00000000051, 2.33512659118, 16522.6597160022],
    [0.00000000049, 2.61656735675, 35579.69123957],
    [0.00000000053, 3.71469727042, 6357.8574485587],
    [0.00000000053, 6.07542895582, 6208.2942514241],
    [0.00000000058, 6.24714677357, 16737.5772365966],
    [0.00000000049, 3.35591683551, 21393.5419698576],
    [0.00000000049, 5.31764383927, 7018.9523635232],
    [0.00000000049, 4.47248238697, 5547.1993364596],
    [0.00000000049, 1.02044068888, 12416.5885028482],
    [0.00000000048, 0.93318398067, 5573.1428014331],
    [0.0000000005, 4.78756360288, 26084.0218062162],
    [0.00000000052, 0.61376591765, 45585.1728121874],
    [0.00000000051, 1.83598363802, 23006.42599258639],
    [0.00000000058, 4.03624047121, 15141.390794312],
    [0.00000000047, 3.55960074091, 22743.4093795164],
    [0.0000000005, 5.52194731109, 21424.4666443034],
    [0.00000000047, 5.68901702449, 24279.10701821359],
    [0.00000000049, 0.09767152059, 5749.8617665478],
    [0.00000000049, 3.40926939847, 6816.289933435],
    [0.00000000046, 1.88054905125, 19378.9185150688],
    [0.00000000047, 0.52217551707, 24065.80792277559],
    [0.00000000046, 4.16716226231, 104351.61256629678],
    [0.0000000005, 2.92366135772, 24602.61243487099],
    [0.00000000054, 4.75214506546, 7834.1210726394],
    [0.00000000045, 3.48834172987, 161000.6857376741],
    [0.00000000049, 2.94403678329, 29303.7289365794],
    [0.00000000048, 1.95408707684, 5244.049239201],
    [0.00000000043, 3.93857315871, 12132.439962106],
    [0.00000000047, 5.81677586075, 18208.349942592],
    [0.00000000049, 3.41896064981, 29289.5018425778],
    [0.00000000044, 2.0668510448, 6175.4123260528],
    [0.00000000044, 1.44008987426, 6390.73937393],
    [0.00000000042, 6.18541909471, 24705.70520908959],
    [0.00000000041, 3.21613978391, 17370.3609759098],
    [0.00000000047, 1.17418881008, 58953.145443294],
    [0.00000000041, 2.05518926769, 23020.65308658799],
    [0.00000000044, 3.20914273688, 26735.9452622132],
    [0.00000000045, 3.70228663504, 54247.4131357504],
    [0.0000000004, 4.57474127522, 32243.4985008806],
    [0.0000000004, 5.17182769558, 24336.0053931492],
    [0.0000000004, 3.62816477586, 19804.8272915828],
    [0.00000000039, 1.13462594128, 18606.4989460002],
    [0.0000000004, 4.71493835645, 8401.8397103698],
    [0.00000000041, 2.69655967341, 16207.886271502],
    [0.00000000038, 5.56507429543, 29088.811415985],
    [0.00000000038, 2.36481926067, 6268.8487559898],
    [0.00000000038, 1.14212165839, 6297.302943993],
    [0.00000000041, 3.38234777816, 15508.6151232744],
    [0.00000000038, 4.82215691915, 6171.8892077038],
    [0.00000000038, 4.96796930709, 6394.262492279],
    [0.00000000039, 1.7519880472, 29826.3063546732],
    [0.00000000037, 3.64776861935, 20452.8694122218],
    [0.00000000052, 3.98463781177, 1047.7473117547],
    [0.00000000043, 6.01711305973, 55022.9357470744],
    [0.00000000037, 6.18577055273, 4061.2192153944],
    [0.0000000004, 2.02818434731, 49515.382508407],
    [0.00000000049, 4.21086629146, 18216.443810661],
    [0.00000000038, 4.59185538964, 18202.21671665939],
    [0.00000000035, 3.16929714068, 26482.1708096244],
    [0.00000000036, 1.56812014048, 9924.8104215106],
    [0.00000000039, 0.88019393819, 24889.5747959916],
    [0.00000000039, 4.63870568395, 26709.6469424134],
    [0.00000000036, 6.07069720518, 25287.7237993998],
    [0.00000000034, 6.10039920596, 6147.4505249814],
    [0.00000000034, 3.68972702028, 6418.7011750014],
    [0.00000000034, 2.54760886649, 21228.3920235458],
    [0.00000000034, 0.68922440987, 33019.0211122046],
    [0.00000000034, 0.40887359374, 17271.8840075264],
    [0.00000000034, 0.33424154418, 29026.48522950779],
    [0.00000000035, 1.63582495302, 7322.1024607818],
    [0.00000000044, 1.21937055747, 3981.490034082],
    [0.00000000033, 2.56048298726, 173566.83743765688],
    [0.00000000035, 3.00160924335, 21954.15760939799],
    [0.00000000034, 3.38052068808, 38500.2760310722],
    [0.00000000032, 2.81219711037, 17686.7528455664],
    [0.00000000033, 0.13837047156, 34520.3093093808],
    [0.00000000041, 2.52021125438, 21202.093703746],
    [0.00000000037, 5.92836585991, 7349.5713271814],
    [0.00000000031, 2.79498926181, 28230.18722269139],
    [0.00000000038, 5.01277542891, 9225.539273283],
    [0.00000000035, 2.49445060142, 8584.6616659008],
    [0.00000000038, 2.67041435749, 15110.4661198662],
    [0.00000000037, 1.84827551648, 29296.6153895786],
    [0.00000000035, 4.26342089717, 11919.140866668],
    [0.00000000035, 2.59482262662, 62883.3551395136],
    [0.00000000035, 5.54313072444, 29062.5130961852],
    [0.00000000035, 5.96888200431, 25685.872802808],
    [0.0000000003, 1.38932865248, 12489.8856287072],
    [0.00000000041, 4.39843263561, 18052.9295431578],
    [0.00000000032, 4.69085169487, 6231.79551212899],
    [0.00000000032, 5.09927453137, 6334.35618785381],
    [0.00000000033, 4.71041781828, 5017.508371365],
    [0.00000000034, 3.82387178783, 22483.84857449259],
    [0.00000000029, 0.69173791628, 27278.4688164408],
    [0.00000000028, 0.30766379271, 24080.03501677719],
    [0.00000000028, 1.80200703459, 21150.8133658836],
    [0.00000000034, 5.49813240003, 5905.7022420756],
    [0.00000000034, 4.29199382621, 6660.4494579072],
    [0.00000000031, 0.7768538725, 15265.8865193004],
    [0.00000000038, 3.55141531291, 31570.7996493912],
    [0.00000000027, 2.03421614285, 36949.2308084242],
    [0.0000000003, 0.75326086687, 12586.9270954752],
    [0.00000000027, 5.24483718904, 233141.3144043615],
    [0.00000000027, 4.99665333874, 24383.0791084414],
    [0.00000000028, 3.97690125997, 34911.412076091],
    [0.00000000027, 4.60109049263, 1692.1656695024],
    [0.00000000027, 3.01465510733, 23581.2581773176],
    [0.00000000028, 5.79946172825, 16193.65917750039],
    [0.00000000027, 5.36876316169, 6360.7496204194],
    [0.00000000027, 4.42136306455, 6205.4020795634],
    [0.00000000032, 5.04711925057, 27511.4678735372],
    [0.00000000027, 0.74966550512, 32367.0976562076],
    [0.00000000027, 3.34326768159, 4487.8174062704],
    [0.0000000003, 4.3213210159, 52175.8062831484],
    [0.00000000029, 4.00870617495, 46386.9937433112],
    [0.00000000026, 1.30285929374, 4797.0957289262],
    [0.00000000028, 5.37411984168, 10239.5838660108],
    [0.00000000026, 5.0815101886, 6339.974224927],
    [0.00000000026, 4.70861603764, 6226.1774750558],
    [0.00000000029, 4.88985723155, 6592.3541726472],
    [0.00000000029, 4.90026899469, 5973.7975273356],
    [0.00000000026, 3.80920015468, 25158.6017197654],
    [0.00000000026, 4.12353757087, 9910.583327509],
    [0.00000000031, 2.37034813214, 24491.4257925834],
    [0.00000000024, 5.26265995716, 11616.976091013],
    [0.00000000024, 4.68388215645, 31172.650645983],
    [0.00000000029, 4.62741692698, 19402.7969528166],
    [0.00000000025, 1.21411432675, 6302.74561089119],
    [0.00000000025, 2.29282659231, 6263.4060890916],
    [0.00000000026, 4.64443513632, 30666.1549584328],
    [0.00000000027, 2.79813911349, 19800.9459562248],
    [0.00000000024, 2.16373217847, 31968.9486527994],
    [0.00000000023, 5.33583152283, 17892.93839400359],
    [0.00000000023, 5.05383022333, 29424.634232916],
    [0.00000000024, 6.12085409163, 20597.2439630412],
    [0.00000000024, 1.65155411828, 23550.34405168259],
    [0.00000000023, 6.07302432574, 6716.7875878682],
    [0.00000000022, 2.42662159283, 7445.5505543992],
    [0.00000000027, 1.56823801633, 28628.3362260996],
    [0.00000000022, 3.39570466574, 40879.4405046438],
    [0.00000000025, 5.52794317615, 14155.2245952666],
    [0.00000000023, 1.49204312505, 6272.0301497275],
    [0.00000000023, 2.01489779401, 6294.1215502553],
    [0.00000000021, 4.21170718841, 22779.4372461938],
    [0.00000000024, 3.83904364251, 8186.5126624926],
    [0.00000000021, 2.51494728863, 30220.9322397324],
    [0.00000000022, 6.09500922463, 4379.6390374902],
    [0.00000000022, 2.95144246643, 28759.81087748319],
    [0.0000000002, 0.07597154617, 28313.288804661],
    [0.00000000026, 1.83971959567, 18422.62935909819],
    [0.00000000022, 1.0628497184, 27707.5424942948],
    [0.00000000027, 5.38238146057, 34513.2630726828],
    [0.00000000025, 1.96129048463, 55798.4583583984],
    [0.00000000019, 0.75805525916, 11712.9553182308],
    [0.00000000025, 4.0627160124, 29864.334027309],
    [0.00000000024, 5.92086856803, 9411.4646150872],
    [0.0000000002, 0.08212819079, 6379.0550772092],
    [0.0000000002, 3.42481272827, 6187.0966227736],
    [0.00000000022, 2.8739355167, 18326.65013188039],
    [0.0000000002, 4.26784309163, 21548.9623692918],
    [0.00000000022, 2.89425510955, 6332.8328754632],
    [0.00000000022, 0.61268580951, 6233.3188245196],
    [0.00000000021, 5.43088404515, 50317.2034395308],
    [0.0000000002, 0.38470757997, 22345.2603761082],
    [0.00000000018, 3.04737429764, 6593.9166488598],
    [0.00000000018, 0.45956662142, 5972.235051123],
    [0.00000000019, 0.79376120003, 5618.3198048614],
    [0.00000000019, 2.71317971903, 6947.8318951214],
    [0.00000000018, 0.28017726157, 34115.1140692746],
    [0.00000000019, 4.89700323392, 83973.83535572988],
    [0.00000000019, 2.72494815105, 84019.8592804939],
    [0.0000000002, 2.60251083721, 42456.7840470916],
    [0.0000000002, 1.28313240949, 9070.1188738488],
];

const Y2: &[Term] = &[
    [0.00005080208, 0.0, 0.0],
    [0.00002178016, 2.82957544235, 12566.1516999828],
    [0.00001020487, 4.63746718598, 6283.0758499914],
    [0.00000092688, 2.6221874842, 18849.2275499742],
    [0.0000001368, 1.80736896884, 6286.5989683404],
    [0.00000013668, 1.70191859339, 6279.5527316424],
    [0.0000000819, 2.84848380902, 6256.7775301916],
    [0.00000008145, 0.65845469208, 6309.3741697912],
    [0.00000008004, 4.35208516133, 6127.6554505572],
    [0.00000007754, 5.43893832496, 6438.4962494256],
    [0.000000089, 3.80944637329, 83996.84731811189],
    [0.00000004754, 4.59631649528, 709.9330485583],
    [0.00000002895, 3.37918924673, 4705.7323075436],
    [0.0000000373, 0.91975073803, 5507.5532386674],
    [0.00000002937, 2.51081180566, 25132.3033999656],
    [0.00000003203, 2.57193731532, 7058.5984613154],
    [0.00000002268, 1.94917686677, 775.522611324],
    [0.00000002148, 0.14152116438, 7860.4193924392],
    [0.00000002031, 0.72283806291, 6275.9623029906],
    [0.00000002031, 2.78410285615, 6290.1893969922],
    [0.00000001904, 2.89589054598, 5486.777843175],
    [0.00000001728, 3.66132960737, 1059.3819301892],
    [0.00000001553, 0.56386962806, 6040.3472460174],
    [0.00000001563, 0.61022183613, 7079.3738568078],
    [0.00000001459, 1.88257310296, 5753.3848848968],
    [0.00000001425, 1.59147859762, 6812.766815086],
    [0.00000001436, 1.45357168378, 5884.9268465832],
    [0.0000000147, 2.94579999718, 6525.8044539654],
    [0.00000001288, 2.05812819149, 6681.2248533996],
    [0.00000001338, 5.75684444528, 5729.506447149],
    [0.00000001039, 4.28230481184, 6282.0955289232],
    [0.00000001039, 5.5078214144, 6284.0561710596],
    [0.00000001191, 4.01917074242, 6836.6452528338],
    [0.00000000904, 0.86455323243, 5331.3574437408],
    [0.00000000871, 2.27688978691, 4933.2084403326],
    [0.00000000877, 1.49469829015, 11790.6290886588],
    [0.00000001102, 3.02451706631, 167283.7615876655],
    [0.00000000774, 2.68163901032, 7234.794256242],
    [0.00000000746, 5.06505548485, 4136.9104335162],
    [0.00000000938, 2.05233105969, 11856.2186514245],
    [0.00000000653, 6.14159854835, 11506.7697697936],
    [0.00000000653, 1.20042991173, 7632.9432596502],
    [0.00000000855, 3.67241064264, 4535.0594369244],
    [0.00000000664, 3.2197812691, 1194.4470102246],
    [0.00000000814, 1.07520259172, 155.4203994342],
    [0.00000000579, 4.64690913221, 796.2980068164],
    [0.00000000778, 4.32748087995, 5088.6288397668],
    [0.00000000511, 0.71257437268, 4694.0029547076],
    [0.00000000686, 3.4713100018, 801.8209311238],
    [0.00000000677, 1.14891148781, 3128.3887650958],
    [0.00000000499, 1.45672603171, 12569.6748183318],
    [0.0000000048, 4.72566522648, 8429.2412664666],
    [0.00000000598, 6.12701256696, 8031.0922630584],
    [0.00000000499, 4.6187781807, 1589.0728952838],
    [0.00000000562, 5.4834452038, 7477.522860216],
    [0.00000000415, 5.06370124318, 6496.3749454294],
    [0.00000000414, 4.73489535739, 6069.7767545534],
    [0.00000000404, 0.15585991312, 3738.761430108],
    [0.000000005, 1.8374633981, 1592.5960136328],
    [0.00000000392, 0.64094689719, 26.2983197998],
    [0.00000000366, 5.93255688855, 553.5694028424],
    [0.00000000458, 5.56847632382, 156137.47598479927],
    [0.0000000032, 0.43684109891, 1990.745017041],
    [0.00000000318, 4.53872367492, 951.7184062506],
    [0.00000000361, 3.78139914914, 7084.8967811152],
    [0.00000000356, 4.78764157089, 12721.572099417],
    [0.00000000279, 5.51531767271, 4690.4798363586],
    [0.00000000347, 6.05487619509, 5481.2549188676],
    [0.00000000279, 0.65072513623, 242.728603974],
    [0.00000000367, 2.35508391326, 9437.762934887],
    [0.0000000026, 0.98725902772, 5223.6939198022],
    [0.00000000255, 0.26797013701, 11371.7046897582],
    [0.00000000242, 3.35248006615, 8827.3902698748],
    [0.00000000245, 2.60270196816, 3154.6870848956],
    [0.00000000222, 0.17857635292, 4164.311989613],
    [0.00000000221, 1.83683124614, 1748.016413067],
    [0.00000000288, 3.16521452041, 1349.8674096588],
    [0.00000000204, 5.15479639183, 11769.8536931664],
    [0.00000000188, 4.08810200628, 7875.6718636242],
    [0.00000000204, 5.17246322251, 10977.078804699],
    [0.00000000188, 5.32022679153, 2388.8940204492],
    [0.00000000183, 2.53020407005, 7342.4577801806],
    [0.00000000196, 4.81306031436, 3930.2096962196],
    [0.00000000207, 0.71423535949, 13367.9726311066],
    [0.00000000206, 1.68118727655, 10973.55568635],
    [0.00000000144, 3.12119544517, 10575.4066829418],
    [0.00000000155, 4.24333182826, 12410.7313005486],
    [0.00000000135, 5.62460495351, 12592.4500197826],
    [0.00000000142, 3.43769023959, 529.6909650946],
    [0.00000000125, 2.30734650656, 12562.6285816338],
    [0.00000000118, 3.15911802638, 13119.72110282519],
    [0.00000000124, 4.88716980692, 8635.9420037632],
    [0.00000000111, 0.80973565731, 398.1490034082],
    [0.00000000099, 1.74904579789, 13517.8701062334],
    [0.00000000097, 4.08519883679, 17260.1546546904],
    [0.00000000102, 2.80042792551, 10988.808157535],
    [0.00000000093, 4.87729654087, 1577.3435424478],
    [0.00000000094, 4.56913615419, 10177.2576795336],
    [0.00000000095, 0.58410858338, 2146.1654164752],
    [0.000000001, 0.77889460323, 13095.8426650774],
    [0.00000000082, 3.65082093235, 16730.4636895958],
    [0.00000000109, 2.42647120751, 12539.853380183],
    [0.0000000008, 2.67636202935, 12323.4230960088],
    [0.00000000105, 1.96765666886, 5642.1982426092],
    [0.00000000101, 0.26697958405, 4292.3308329504],
    [0.00000000075, 4.15987686546, 6709.6740408674],
    [0.00000000075, 5.63024936078, 5856.4776591154],
    [0.000000001, 5.37997214401, 250570.6758572191],
    [0.00000000071, 5.31207567706, 14314.1681130498],
    [0.00000000092, 0.4115987907, 13916.0191096416],
    [0.00000000091, 1.53881053794, 6923.9534573736],
    [0.00000000082, 2.43138857903, 31415.379249957],
    [0.00000000083, 4.40764560915, 95143.1329209781],
    [0.00000000061, 2.6690586221, 8273.8208670324],
    [0.00000000055, 2.98440193981, 5643.1785636774],
    [0.00000000056, 3.14343584528, 639.897286314],
    [0.00000000054, 4.06071028317, 16496.3613962024],
    [0.00000000055, 2.26469062405, 13341.6743113068],
    [0.00000000073, 0.30591075918, 71430.69561812909],
    [0.00000000052, 5.97085689483, 3634.6210245184],
    [0.0000000005, 2.61636629528, 12573.2652469836],
    [0.00000000052, 6.1967230054, 15720.8387848784],
    [0.00000000065, 4.92633618792, 4732.0306273434],
    [0.00000000066, 3.9250563742, 2787.0430238574],
    [0.00000000048, 0.45273646609, 13362.4497067992],
    [0.00000000053, 2.55293773264, 14919.0178537546],
    [0.00000000047, 2.25879651839, 12964.300703391],
    [0.00000000047, 1.0689512961, 3894.1818295422],
    [0.00000000042, 5.09300549015, 24072.9214697764],
    [0.00000000051, 5.97812516445, 6195.76764545159],
    [0.00000000051, 3.81200106179, 6370.3840545312],
    [0.00000000048, 5.31227829697, 2118.7638603784],
    [0.00000000041, 0.92655469135, 18319.5365848796],
    [0.00000000041, 2.5224794661, 3185.1920272656],
    [0.00000000056, 2.58677293772, 84672.47584450469],
    [0.00000000039, 2.70559904392, 20426.571092422],
    [0.00000000053, 1.64080385432, 239424.39025435288],
    [0.00000000045, 6.04609930388, 9779.1086761254],
    [0.00000000044, 3.24184126256, 8662.240323563],
    [0.00000000043, 2.12627080359, 18139.2945014159],
    [0.00000000033, 1.67764931937, 3496.032826134],
    [0.00000000035, 5.17885502556, 18875.525869774],
    [0.00000000035, 4.51995137508, 10419.9862835076],
    [0.00000000031, 5.3588642681, 23013.5395395872],
    [0.0000000003, 2.82636067861, 12808.8803039568],
    [0.00000000042, 0.90184598337, 82576.9812209953],
    [0.00000000031, 3.95971884541, 14712.317116458],
    [0.0000000004, 4.02926744005, 17789.845619785],
    [0.00000000031, 5.47911308336, 22779.4372461938],
    [0.0000000003, 2.31682203487, 10447.3878396044],
    [0.00000000028, 2.11876435927, 14143.4952424306],
    [0.00000000028, 3.91478954977, 5429.8794682394],
    [0.0000000003, 1.17555913144, 9380.9596727172],
    [0.00000000026, 0.7231434799, 9623.6882766912],
    [0.00000000026, 2.78379743916, 2942.4634232916],
    [0.0000000003, 1.83762487734, 10213.285546211],
    [0.00000000026, 0.18151529861, 18209.33026366019],
    [0.00000000025, 1.11733039286, 3583.3410306738],
    [0.00000000024, 1.36775216012, 9917.6968745098],
    [0.00000000026, 5.61732376806, 12012.5822971404],
    [0.00000000023, 0.92088373151, 12559.038152982],
    [0.00000000023, 5.52325028212, 11015.1064773348],
    [0.00000000023, 0.69647593831, 26709.6469424134],
    [0.00000000024, 3.30887701069, 77713.7714681205],
    [0.00000000022, 4.42086856143, 6993.0088985497],
    [0.00000000021, 0.81252266714, 17256.6315363414],
    [0.00000000023, 5.52062840479, 149854.4001348079],
    [0.00000000019, 0.35979025769, 11926.2544136688],
    [0.00000000018, 0.71176167314, 11614.4332937322],
    [0.00000000019, 4.89783197147, 18073.7049386502],
    [0.00000000019, 2.09021029647, 30639.856638633],
    [0.00000000022, 2.19299415984, 17298.1823273262],
    [0.00000000019, 1.23251732918, 19651.048481098],
    [0.00000000023, 3.21303801707, 72850.56171524568],
    [0.00000000017, 2.38624204004, 8982.810669309],
    [0.00000000021, 2.20285403235, 16858.4825329332],
    [0.00000000021, 2.89968186701, 12036.4607348882],
    [0.00000000014, 3.30566599775, 16460.33352952499],
    [0.0000000002, 4.99490943445, 5573.1428014331],
    [0.00000000015, 2.64766821618, 20199.094959633],
    [0.00000000014, 4.87181144278, 22483.84857449259],
    [0.00000000019, 1.2434168806, 8671.9698704406],
    [0.00000000014, 5.97526530111, 90279.92316810328],
    [0.00000000016, 5.12394281212, 23543.23050468179],
    [0.00000000012, 1.13908210541, 17996.0311682222],
    [0.00000000012, 5.43458827343, 19402.7969528166],
    [0.00000000012, 2.80798050151, 10818.1352869158],
    [0.00000000015, 5.28864619208, 12567.132021051],
    [0.00000000011, 0.21390152319, 28766.924424484],
    [0.00000000011, 0.68624711981, 14945.3161735544],
    [0.00000000011, 3.36248263984, 18451.07854656599],
    [0.00000000011, 4.69826436697, 2352.8661537718],
    [0.00000000011, 0.30993049479, 22805.7355659936],
    [0.00000000011, 0.67524830165, 35371.8872659764],
    [0.00000000014, 0.36237106347, 21228.3920235458],
    [0.0000000001, 4.48227917427, 23141.5583829246],
    [0.0000000001, 0.98562604234, 22345.2603761082],
    [0.00000000009, 6.20387541356, 29826.3063546732],
    [0.0000000001, 4.89597714031, 12779.4507954208],
    [0.0000000001, 4.53062887484, 213.299095438],
    [0.00000000011, 5.10892321991, 25158.6017197654],
    [0.00000000009, 2.89659186256, 23581.2581773176],
];

const Y3: &[Term] = &[
    [0.00000128116, PI, 0.0],
    [0.00000072366, 1.32019314413, 12566.1516999828],
    [0.00000013847, 5.37444701633, 6283.0758499914],
    [0.00000005044, 0.96001931081, 18849.2275499742],
    [0.00000001481, 0.66592602555, 6438.4962494256],
    [0.00000001481, 2.84101489351, 6127.6554505572],
    [0.00000000644, 3.314882721, 6279.5527316424],
    [0.00000000644, 0.19205819806, 6286.5989683404],
    [0.00000000318, 2.06760677503, 6040.3472460174],
    [0.00000000318, 1.43933414403, 6525.8044539654],
    [0.0000000022, 0.77087312633, 25132.3033999656],
    [0.00000000201, 5.53953658848, 6836.6452528338],
    [0.00000000201, 4.25058963776, 5729.506447149],
    [0.00000000036, 6.12441668493, 12569.6748183318],
    [0.00000000033, 2.66474952932, 12410.7313005486],
    [0.00000000018, 0.75629855075, 12721.572099417],
    [0.00000000011, 4.70234349211, 12592.4500197826],
];

const Y4: &[Term] = &[
    [0.00000004187, PI, 0.0],
    [0.00000001931, 5.89883838, 12566.1516999828],
    [0.00000000595, 0.5167959084, 6283.0758499914],
    [0.0000000021, 2.17239897368, 6438.4962494256],
    [0.0000000021, 1.33454194538, 6127.6554505572],
    [0.00000000229, 5.59311519226, 18849.2275499742],
    [0.00000000044, 3.02550685011, 709.9330485583],
    [0.00000000021, 4.8963301434, 6279.5527316424],
    [0.00000000021, 4.89379608284, 6286.5989683404],
    [0.00000000013, 2.23957099685, 83996.84731811189],
    [0.00000000011, 5.36791829228, 25132.3033999656],
    [0.00000000009, 3.62304265651, 11856.2186514245],
    [0.00000000007, 4.59462394746, 167283.7615876655],
    [0.00000000005, 1.11835906029, 12410.7313005486],
    [0.00000000006, 3.99789149114, 156137.47598479927],
];

const Y5: &[Term] = &[
    [0.00000000072, 0.0, 0.0],
    [0.00000000043, 4.51710019379, 12566.1516999828],
    [0.00000000025, 3.76700032666, 6438.4962494256],
    [0.00000000025, 6.02312589958, 6127.6554505572],
    [0.00000000021, 2.56882591004, 6283.0758499914],
    [0.00000000008, 3.95508428463, 18849.2275499742],
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
    [0.00227822442, 3.41372504278, 6283.0758499914],
    [0.00005429282, 0.0, 0.0],
    [0.00001903183, 3.37061270964, 12566.1516999828],
    [0.00000023859, 3.32836261978, 18849.2275499742],
    [0.00000008671, 1.82289925035, 5223.6939198022],
    [0.00000007767, 3.88787435832, 5507.5532386674],
    [0.00000007063, 5.19303169379, 2352.8661537718],
    [0.0000000709, 2.3290731799, 83996.84731811189],
    [0.00000005362, 2.22429221689, 529.6909650946],
    [0.00000003894, 2.15568517178, 6279.5527316424],
    [0.00000003892, 1.53021064904, 6286.5989683404],
    [0.00000003285, 4.88047587852, 10213.285546211],
    [0.00000002165, 6.23220223547, 7860.4193924392],
    [0.00000002084, 5.84682067018, 1577.3435424478],
    [0.00000001959, 1.42270916062, 12036.4607348882],
    [0.00000001396, 0.50057569258, 6309.3741697912],
    [0.00000001584, 1.81185253086, 5856.4776591154],
    [0.00000001493, 1.75695182457, 5884.9268465832],
    [0.00000001713, 6.04661123493, 398.1490034082],
    [0.00000001298, 3.71598693704, 1059.3819301892],
    [0.00000001573, 2.20074999518, 9437.762934887],
    [0.00000001503, 3.94648902715, 4705.7323075436],
    [0.00000001041, 2.94815263534, 6256.7775301916],
    [0.00000000983, 2.24865863102, 6681.2248533996],
    [0.0000000115, 2.43940396435, 775.522611324],
    [0.00000001171, 0.74619691355, 6812.766815086],
    [0.00000000881, 1.86103443124, 3930.2096962196],
    [0.00000000696, 1.4589695469, 11790.6290886588],
    [0.00000000732, 1.60348898963, 4694.0029547076],
    [0.00000000487, 0.04282116718, 11506.7697697936],
    [0.00000000632, 4.34207925908, 5753.3848848968],
    [0.00000000584, 3.11517364836, 709.9330485583],
    [0.00000000583, 3.92560802577, 12168.0026965746],
    [0.00000000409, 4.63047700185, 796.2980068164],
    [0.00000000483, 5.74980419879, 17789.845619785],
    [0.00000000405, 1.97558286872, 6283.0085396886],
    [0.00000000405, 1.53147989887, 6283.14316029419],
    [0.00000000354, 3.28490469609, 25132.3033999656],
    [0.00000000417, 3.63631064623, 13367.9726311066],
    [0.00000000367, 1.55081387384, 18073.7049386502],
    [0.00000000284, 0.15061211477, 3738.761430108],
    [0.00000000295, 2.75399172194, 14143.4952424306],
    [0.00000000288, 2.98400521096, 6275.9623029906],
    [0.00000000353, 2.42503121206, 213.299095438],
    [0.0000000025, 0.42640065085, 7079.3738568078],
    [0.00000000251, 2.81315684448, 6290.1893969922],
    [0.00000000338, 2.55274440586, 7058.5984613154],
    [0.0000000023, 2.54182122331, 7084.8967811152],
    [0.00000000212, 4.71778046808, 6496.3749454294],
    [0.00000000188, 3.17403855561, 5486.777843175],
    [0.00000000184, 4.29245958347, 1589.0728952838],
    [0.00000000216, 2.95054003179, 22003.9146348698],
    [0.00000000165, 1.19407165511, 5643.1785636774],
    [0.00000000196, 4.68462471621, 167283.7615876655],
    [0.00000000162, 2.94100342992, 15720.8387848784],
    [0.00000000189, 5.09534739493, 17298.1823273262],
    [0.00000000149, 5.23057852418, 11769.8536931664],
    [0.0000000015, 1.65291444016, 3128.3887650958],
    [0.00000000143, 5.483627955, 10977.078804699],
    [0.00000000144, 3.81203756929, 6262.300454499],
    [0.00000000143, 5.97809021355, 6303.8512454838],
    [0.00000000136, 4.97038154072, 4136.9104335162],
    [0.00000000163, 2.00627600582, 5230.807466803],
    [0.00000000135, 3.68020950012, 7.1135470008],
    [0.0000000013, 4.41428061934, 6127.6554505572],
    [0.00000000123, 0.93547502051, 3340.6124266998],
    [0.00000000122, 3.13394683057, 1194.4470102246],
    [0.00000000131, 4.24961399629, 6282.0955289232],
    [0.00000000131, 5.54051222995, 6284.0561710596],
    [0.00000000161, 3.32421999691, 6283.3196674749],
    [0.00000000128, 4.35489873365, 25934.1243310894],
    [0.00000000113, 4.4257886267, 19651.048481098],
    [0.00000000107, 2.9744734352, 8827.3902698748],
    [0.00000000107, 0.41198538606, 5481.2549188676],
    [0.00000000131, 2.29167404623, 3154.6870848956],
    [0.00000000139, 0.84923405785, 6069.7767545534],
    [0.00000000109, 3.21932289821, 801.8209311238],
    [0.00000000115, 3.71248897285, 11856.2186514245],
    [0.00000000086, 2.78714560645, 5216.5803728014],
    [0.00000000116, 1.07208569199, 12352.8526045448],
    [0.00000000085, 4.74199868968, 8429.2412664666],
    [0.00000000112, 5.29899379351, 2544.3144198834],
    [0.00000000096, 5.20691825399, 17260.1546546904],
    [0.00000000074, 4.51170584596, 8635.9420037632],
    [0.00000000097, 5.50959692365, 29864.334027309],
    [0.00000000094, 0.25007575444, 21228.3920235458],
    [0.00000000082, 3.01994555641, 20426.571092422],
    [0.00000000071, 0.47420303374, 2146.1654164752],
    [0.00000000074, 1.27647360807, 4164.311989613],
    [0.00000000075, 0.73893922793, 9225.539273283],
    [0.00000000065, 1.39694123605, 12569.6748183318],
    [0.00000000074, 2.20184828895, 37724.7534197482],
    [0.00000000058, 5.36736393336, 11015.1064773348],
    [0.00000000069, 3.5648387975, 4535.0594369244],
    [0.00000000064, 2.05206957553, 12562.6285816338],
    [0.0000000005, 4.30582312752, 426.598190876],
    [0.00000000056, 4.14424591372, 5088.6288397668],
    [0.00000000061, 0.63918772258, 33794.5437235286],
    [0.00000000049, 6.20603791837, 12559.038152982],
    [0.00000000059, 4.9245781062, 71430.69561812909],
    [0.00000000058, 1.6820128443, 25158.6017197654],
    [0.00000000051, 5.03600618727, 5863.5912061162],
    [0.00000000047, 0.30276119177, 11371.7046897582],
    [0.0000000005, 0.77635440262, 26.2983197998],
    [0.00000000041, 1.87344929139, 1748.016413067],
    [0.00000000041, 5.91861144924, 23581.2581773176],
    [0.00000000055, 1.37242658028, 7342.4577801806],
    [0.00000000053, 1.47750772846, 18319.5365848796],
    [0.00000000042, 0.11693102263, 23543.23050468179],
    [0.00000000045, 5.18332998014, 16496.3613962024],
    [0.00000000045, 1.69577010458, 6702.5604938666],
    [0.0000000005, 3.62740835096, 41654.9631159678],
    [0.0000000005, 0.12043698146, 29088.811415985],
    [0.00000000039, 2.15562950918, 4933.2084403326],
    [0.00000000048, 5.3711874249, 7477.522860216],
    [0.0000000004, 3.02033323932, 10447.3878396044],
    [0.00000000035, 3.52010534689, 26087.9031415742],
    [0.00000000045, 6.10982446357, 8031.0922630584],
    [0.00000000043, 4.08726331262, 156137.47598479927],
    [0.00000000032, 6.09025731476, 64809.80550494129],
];

const Z2: &[Term] = &[
    [0.00009721989, 5.15233725915, 6283.0758499914],
    [0.00000349501, PI, 0.0],
    [0.00000067136, 0.64403888586, 12566.1516999828],
    [0.00000002169, 1.07314429736, 18849.2275499742],
    [0.00000001662, 1.62746869551, 84334.66158130829],
    [0.00000000635, 3.51985338656, 6279.5527316424],
    [0.00000000492, 2.41382223971, 1047.7473117547],
    [0.00000000347, 6.16127984865, 5223.6939198022],
    [0.00000000322, 0.37660897389, 6286.5989683404],
    [0.00000000302, 4.06770618987, 83996.84731811189],
    [0.00000000314, 2.37089871705, 5507.5532386674],
    [0.00000000242, 1.64810071161, 7860.4193924392],
    [0.00000000243, 3.96741961391, 529.6909650946],
    [0.00000000229, 0.50869157074, 2352.8661537718],
    [0.0000000017, 5.28668290523, 6256.7775301916],
    [0.00000000174, 0.134969879, 10213.285546211],
    [0.00000000125, 3.13799899281, 5884.9268465832],
    [0.00000000118, 3.85466055344, 1577.3435424478],
    [0.00000000123, 4.17102530625, 6309.3741697912],
    [0.00000000089, 1.65074757807, 4705.7323075436],
    [0.0000000009, 4.13333302298, 5753.3848848968],
    [0.00000000067, 0.30879908581, 775.522611324],
    [0.00000000088, 2.93230657226, 12036.4607348882],
    [0.00000000065, 6.02619905507, 6812.766815086],
    [0.00000000067, 1.15131045651, 25132.3033999656],
    [0.00000000065, 2.72055837855, 6127.6554505572],
    [0.00000000062, 0.78482367183, 6438.4962494256],
    [0.00000000057, 1.49017558261, 11506.7697697936],
    [0.00000000056, 4.55921214755, 5486.777843175],
    [0.00000000075, 0.84213523741, 167621.5758508619],
    [0.00000000069, 1.21340931171, 398.1490034082],
    [0.00000000047, 5.28931662006, 7079.3738568078],
    [0.00000000044, 3.09697268535, 11790.6290886588],
    [0.00000000057, 6.15295833679, 12194.0329146209],
    [0.0000000004, 1.74073861374, 1059.3819301892],
    [0.0000000004, 2.70069983169, 10988.808157535],
    [0.00000000036, 0.32483893578, 6681.2248533996],
    [0.00000000046, 3.38617099014, 156475.2902479957],
    [0.00000000033, 1.26266496002, 6290.1893969922],
    [0.00000000033, 2.25067065498, 6275.9623029906],
    [0.00000000032, 2.90595681986, 796.2980068164],
    [0.00000000029, 1.96179670465, 7.1135470008],
    [0.00000000023, 4.86623778952, 3738.761430108],
    [0.00000000025, 4.85403147726, 709.9330485583],
    [0.00000000021, 6.22275008403, 6069.7767545534],
    [0.00000000024, 5.83690442827, 6282.0955289232],
    [0.00000000024, 3.95322179797, 6284.0561710596],
    [0.00000000022, 3.46618662246, 4136.9104335162],
    [0.00000000021, 3.58048145762, 6496.3749454294],
    [0.00000000025, 5.59503085104, 7058.5984613154],
    [0.00000000019, 1.62978232282, 1194.4470102246],
    [0.00000000019, 2.82679050999, 1589.0728952838],
    [0.00000000024, 5.40715542605, 12168.0026965746],
];

const Z3: &[Term] = &[
    [0.00000276077, 0.5941325873, 6283.0758499914],
    [0.00000025551, PI, 0.0],
    [0.0000000181, 0.11612262117, 12566.1516999828],
    [0.00000000113, 5.66152847225, 18849.2275499742],
    [0.00000000056, 5.02765554835, 6279.5527316424],
    [0.00000000024, 0.41571093398, 83996.84731811189],
    [0.00000000019, 5.99007646261, 6256.7775301916],
    [0.00000000018, 3.80004734567, 6309.3741697912],
    [0.00000000018, 1.21049250774, 6127.6554505572],
    [0.00000000018, 2.29734567137, 6438.4962494256],
    [0.00000000015, 4.72881467263, 6286.5989683404],
    [0.00000000011, 1.4834722311, 709.9330485583],
];

const Z4: &[Term] = &[
    [0.00000005751, 2.27069090892, 6283.0758499914],
    [0.00000001305, 0.0, 0.0],
    [0.0000000006, 4.26712050846, 12566.1516999828],
    [0.00000000006, 4.13914011953, 18849.2275499742],
    [0.00000000005, 0.84308705203, 1047.7473117547],
    [0.00000000005, 0.05711572303, 84334.66158130829],
];

pub static EARTH: Vsop87Table = Vsop87Table {
    variables: Variables::Rectangular,
    reference: Reference::EclipticJ2000,
    series: [
        &[X0, X1, X2, X3, X4, X5],
        &[Y0, Y1, Y2, Y3, Y4, Y5],
        &[Z0, Z1, Z2, Z3, Z4],
    ],
};
